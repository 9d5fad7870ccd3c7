use heapless::String as HeaplessString;
use ride_admin_db::models::booking::BookingModel;
use rust_decimal::Decimal;
use uuid::Uuid;

pub fn create_test_booking(status: &str, fare: Option<Decimal>) -> BookingModel {
    BookingModel {
        id: Uuid::new_v4(),
        status: HeaplessString::try_from(status).unwrap(),
        fare,
        amount: None,
        pickup_location: Some("Kotoka Airport".to_string()),
        dropoff_location: Some("Osu".to_string()),
        driver_id: Some(Uuid::new_v4()),
        client_id: Some(Uuid::new_v4()),
        created_at: None,
    }
}
