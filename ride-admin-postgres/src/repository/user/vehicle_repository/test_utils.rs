use heapless::String as HeaplessString;
use ride_admin_db::models::user::VehicleModel;
use uuid::Uuid;

pub fn create_test_vehicle(user_id: Uuid, brand: &str, model: &str, number: &str) -> VehicleModel {
    VehicleModel {
        id: Uuid::new_v4(),
        user_id,
        brand: Some(HeaplessString::try_from(brand).unwrap()),
        model: Some(HeaplessString::try_from(model).unwrap()),
        number: Some(HeaplessString::try_from(number).unwrap()),
        created_at: None,
    }
}
