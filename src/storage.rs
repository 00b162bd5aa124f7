use web_sys::Storage;

const PANEL_OPEN_KEY: &str = "chatOpen";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn parse_flag(value: Option<String>) -> bool {
    matches!(value.as_deref(), Some("true"))
}

// An absent key, a stale value or unavailable storage all read as collapsed.
pub fn panel_open() -> bool {
    let stored = local_storage().and_then(|storage| storage.get_item(PANEL_OPEN_KEY).ok()?);
    parse_flag(stored)
}

pub fn set_panel_open(open: bool) {
    if let Some(storage) = local_storage() {
        let value = if open { "true" } else { "false" };
        if let Err(error) = storage.set_item(PANEL_OPEN_KEY, value) {
            tracing::debug!("failed to persist panel state: {error:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_reads_as_collapsed() {
        assert!(!parse_flag(None));
    }

    #[test]
    fn only_the_literal_true_expands() {
        assert!(parse_flag(Some("true".to_owned())));
        assert!(!parse_flag(Some("false".to_owned())));
        assert!(!parse_flag(Some("TRUE".to_owned())));
        assert!(!parse_flag(Some("1".to_owned())));
    }
}
