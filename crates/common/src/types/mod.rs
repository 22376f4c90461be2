use serde::{Deserialize, Serialize};

/// Static greeting returned by the root route.
#[derive(Serialize, Deserialize, Debug)]
pub struct Greeting {
    pub message: &'static str,
}

/// Deletion acknowledgement. The wire key is `OK`, kept as-is for
/// compatibility with existing clients.
#[derive(Serialize, Deserialize, Debug)]
pub struct Deleted {
    #[serde(rename = "OK")]
    pub ok: bool,
}
