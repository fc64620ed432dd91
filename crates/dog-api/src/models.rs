//! Wire Models
//!
//! Request and response bodies exchanged with the dog service.

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque dog identifier assigned by the service
pub type DogId = String;

/// Dog record returned by `POST /dogs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DogId,
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

/// Body of `POST /auth/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

/// Body of `GET /dogs/search`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "resultIds", default, deserialize_with = "null_as_empty")]
    pub result_ids: Vec<DogId>,
}

/// A `null` id list is an empty page
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<DogId>, D::Error> {
    Ok(Option::<Vec<DogId>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /dogs/match`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchResponse {
    #[serde(rename = "match")]
    pub dog_id: DogId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_missing_ids_is_empty() {
        let resp: SearchResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(resp.result_ids.is_empty());
    }

    #[test]
    fn test_search_response_null_ids_is_empty() {
        let resp: SearchResponse = serde_json::from_str(r#"{"resultIds": null}"#).unwrap();
        assert!(resp.result_ids.is_empty());
    }

    #[test]
    fn test_search_response_keeps_order() {
        let resp: SearchResponse =
            serde_json::from_str(r#"{"resultIds": ["c", "a", "b"], "total": 3, "next": null}"#)
                .unwrap();
        assert_eq!(resp.result_ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_dog_record() {
        let dog: Dog = serde_json::from_str(
            r#"{"id":"VXGFTIcBOvEgQ5OCx40W","img":"https://example.com/1.jpg","name":"Emory","age":10,"zip_code":"48333","breed":"Chihuahua"}"#,
        )
        .unwrap();
        assert_eq!(dog.name, "Emory");
        assert_eq!(dog.age, 10);
        assert_eq!(dog.zip_code, "48333");
    }

    #[test]
    fn test_match_response() {
        let resp: MatchResponse = serde_json::from_str(r#"{"match":"abc"}"#).unwrap();
        assert_eq!(resp.dog_id, "abc");
    }
}
