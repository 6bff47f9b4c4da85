#[cfg(test)]
mod tests {
    use petal_core::*;

    // ── HexColor parsing ───────────────────────────────────────

    #[test]
    fn test_hex_color_parses_reference_palette() {
        let palette = [
            ("#fff1f0", HexColor::rgb(0xff, 0xf1, 0xf0)),
            ("#f3f1ff", HexColor::rgb(0xf3, 0xf1, 0xff)),
            ("#f0fff4", HexColor::rgb(0xf0, 0xff, 0xf4)),
            ("#fff3e0", HexColor::rgb(0xff, 0xf3, 0xe0)),
            ("#e3f2fd", HexColor::rgb(0xe3, 0xf2, 0xfd)),
        ];
        for (literal, expected) in palette {
            assert_eq!(literal.parse::<HexColor>().unwrap(), expected);
        }
    }

    #[test]
    fn test_hex_color_accepts_uppercase_digits() {
        let color: HexColor = "#FFF1F0".parse().unwrap();
        assert_eq!(color, HexColor::rgb(0xff, 0xf1, 0xf0));
        // Display normalizes to lowercase
        assert_eq!(color.to_string(), "#fff1f0");
    }

    #[test]
    fn test_hex_color_rejects_malformed_literals() {
        for bad in ["red", "#fff", "#fff1f", "#fff1f00", "fff1f0", "#ggg1f0", ""] {
            let err = bad.parse::<HexColor>().unwrap_err();
            match err {
                PetalError::InvalidColorFormat { value } => assert_eq!(value, bad),
                other => panic!("expected InvalidColorFormat, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_hex_color_is_valid() {
        assert!(HexColor::is_valid("#e3f2fd"));
        assert!(!HexColor::is_valid("e3f2fd"));
        assert!(!HexColor::is_valid("#e3f2fd00"));
    }

    // ── Serde ──────────────────────────────────────────────────

    #[test]
    fn test_hex_color_serde_roundtrip() {
        let color = HexColor::rgb(0xf0, 0xff, 0xf4);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#f0fff4\"");
        let restored: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, color);
    }

    #[test]
    fn test_hex_color_deserialize_rejects_bad_value() {
        assert!(serde_json::from_str::<HexColor>("\"#12\"").is_err());
    }

    // ── Error display ──────────────────────────────────────────

    #[test]
    fn test_error_messages() {
        let e = PetalError::InvalidGlobPattern {
            pattern: "./src\\**".into(),
            reason: "backslash path separator".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid glob pattern './src\\**': backslash path separator"
        );

        let e = PetalError::DuplicateTokenName {
            category: "colors".into(),
            name: "card-pink".into(),
        };
        assert_eq!(e.to_string(), "duplicate token name in colors: card-pink");

        let e = PetalError::UnknownToken {
            category: "colors".into(),
            name: "card-gold".into(),
        };
        assert_eq!(e.to_string(), "unknown token in colors: card-gold");
    }
}
