//! Fixtures shared by the reservation tests.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use quisin_entity::reservation::{Reservation, ReservationStatus};
use quisin_entity::table::{Table, TableStatus};

/// 2025-06-01 at the given UTC wall-clock time.
pub(crate) fn at(hour: u32, minute: u32, second: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, hour, minute, second)
        .single()
        .expect("valid fixture time")
}

pub(crate) fn table(restaurant_id: Uuid, capacity: i32, status: TableStatus) -> Table {
    Table {
        id: Uuid::new_v4(),
        restaurant_id,
        table_number: 1,
        seating_capacity: capacity,
        location_description: None,
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub(crate) fn reservation(
    table: &Table,
    when: DateTime<Utc>,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id: Uuid::new_v4(),
        restaurant_id: table.restaurant_id,
        table_id: table.id,
        customer_id: Uuid::new_v4(),
        reservation_date: when,
        number_of_guests: 2,
        status,
        special_requests: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
