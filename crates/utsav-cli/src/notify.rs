//! Notification and availability commands.

use chrono::NaiveDate;

use utsav_api::MarketClient;

/// Lists notifications, or marks one as read when `mark_read` is set.
pub(crate) async fn run_notifications(
    client: &MarketClient,
    mark_read: Option<i64>,
) -> anyhow::Result<()> {
    if let Some(id) = mark_read {
        client.mark_notification_read(id).await?;
        println!("notification {id} marked read");
        return Ok(());
    }

    let notifications = client.list_notifications().await?;
    println!("{} notifications", notifications.len());
    for n in &notifications {
        let marker = if n.read { " " } else { "*" };
        println!(
            "{marker} [{}] {}  ({})",
            n.id,
            n.message,
            n.created_at.format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

/// Checks a vendor's availability on a date and prints the result.
pub(crate) async fn run_availability(
    client: &MarketClient,
    business_id: i64,
    date: NaiveDate,
) -> anyhow::Result<()> {
    let availability = client.check_availability(business_id, date).await?;
    let status = if availability.available {
        "available"
    } else {
        "not available"
    };
    match &availability.note {
        Some(note) => println!("business {business_id} is {status} on {date} ({note})"),
        None => println!("business {business_id} is {status} on {date}"),
    }

    Ok(())
}
