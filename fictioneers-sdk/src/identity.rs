use uuid::Uuid;

/// Generate a random v4 UUID to identify a user when the caller supplies none.
pub(crate) fn random_user_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_v4_uuids() {
        let id = random_user_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(id.len(), 36);
        assert_ne!(id, random_user_id());
    }
}
