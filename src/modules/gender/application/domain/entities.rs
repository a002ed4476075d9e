use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gender {
    pub id: i16,
    pub title: String,
}
