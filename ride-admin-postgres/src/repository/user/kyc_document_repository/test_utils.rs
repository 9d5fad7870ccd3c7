use heapless::String as HeaplessString;
use ride_admin_db::models::user::KycDocumentModel;
use uuid::Uuid;

pub fn create_test_document(user_id: Uuid, key: &str) -> KycDocumentModel {
    KycDocumentModel {
        id: Uuid::new_v4(),
        user_id,
        document_key: HeaplessString::try_from(key).unwrap(),
        url: Some(format!("https://files.example.com/{user_id}/{key}.jpg")),
        uploaded_at: None,
        document_type: HeaplessString::try_from(key).unwrap(),
    }
}
