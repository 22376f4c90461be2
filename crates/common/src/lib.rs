pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_serializes_message_field() {
        let g = types::Greeting { message: "Hello world" };
        let json = serde_json::to_value(&g).unwrap();
        assert_eq!(json["message"], "Hello world");
    }

    #[test]
    fn deleted_serializes_upper_ok_key() {
        let d = types::Deleted { ok: true };
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["OK"], true);
    }
}
