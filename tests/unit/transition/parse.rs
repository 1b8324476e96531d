use super::*;

#[test]
fn blend_aliases_parse() {
    for kind in ["blend", "dissolve", "crossfade", " Crossfade "] {
        let spec = TransitionSpec {
            kind: kind.to_string(),
            params: serde_json::Value::Null,
        };
        assert_eq!(parse_transition(&spec).unwrap(), TransitionKind::Blend);
    }
}

#[test]
fn wipe_dir_parses_aliases() {
    let spec = TransitionSpec {
        kind: "wipe".to_string(),
        params: serde_json::json!({ "dir": "ttb" }),
    };
    assert_eq!(
        parse_transition(&spec).unwrap(),
        TransitionKind::Wipe {
            dir: Direction::TopToBottom
        }
    );
}

#[test]
fn wipe_defaults_to_left_to_right() {
    let spec = TransitionSpec {
        kind: "wipe".to_string(),
        params: serde_json::Value::Null,
    };
    assert_eq!(
        parse_transition(&spec).unwrap(),
        TransitionKind::Wipe {
            dir: Direction::LeftToRight
        }
    );
}

#[test]
fn unknown_kind_and_dir_are_rejected() {
    let spec = TransitionSpec {
        kind: "sparkle".to_string(),
        params: serde_json::Value::Null,
    };
    assert!(parse_transition(&spec).is_err());

    let spec = TransitionSpec {
        kind: "push".to_string(),
        params: serde_json::json!({ "dir": "diagonal" }),
    };
    assert!(parse_transition(&spec).is_err());
}

#[test]
fn params_must_be_object_when_set() {
    let spec = TransitionSpec {
        kind: "wipe".to_string(),
        params: serde_json::json!([1, 2, 3]),
    };
    assert!(parse_transition(&spec).is_err());
}

#[test]
fn split_parses_orientation_and_out() {
    let spec = TransitionSpec {
        kind: "split".to_string(),
        params: serde_json::json!({ "orientation": "v", "out": true }),
    };
    assert_eq!(
        parse_transition(&spec).unwrap(),
        TransitionKind::Split {
            orientation: SplitOrientation::Vertical,
            out: true
        }
    );

    let spec = TransitionSpec {
        kind: "split".to_string(),
        params: serde_json::Value::Null,
    };
    assert_eq!(
        parse_transition(&spec).unwrap(),
        TransitionKind::Split {
            orientation: SplitOrientation::Horizontal,
            out: false
        }
    );
}

#[test]
fn fade_color_parses_hex() {
    let spec = TransitionSpec {
        kind: "fade".to_string(),
        params: serde_json::json!({ "color": "#FFFFFF" }),
    };
    assert_eq!(
        parse_transition(&spec).unwrap(),
        TransitionKind::Fade {
            color: Rgba8Premul::from_straight_rgba(255, 255, 255, 255)
        }
    );

    let spec = TransitionSpec {
        kind: "fade".to_string(),
        params: serde_json::Value::Null,
    };
    assert_eq!(
        parse_transition(&spec).unwrap(),
        TransitionKind::Fade {
            color: Rgba8Premul::from_straight_rgba(0, 0, 0, 255)
        }
    );

    let spec = TransitionSpec {
        kind: "fade".to_string(),
        params: serde_json::json!({ "color": "#12345" }),
    };
    assert!(parse_transition(&spec).is_err());
}

#[test]
fn spec_roundtrips_through_json() {
    let spec: TransitionSpec =
        serde_json::from_str(r#"{ "kind": "wipe", "params": { "dir": "rtl" } }"#).unwrap();
    assert_eq!(
        parse_transition(&spec).unwrap(),
        TransitionKind::Wipe {
            dir: Direction::RightToLeft
        }
    );

    // params is optional in the serialized form.
    let spec: TransitionSpec = serde_json::from_str(r#"{ "kind": "blend" }"#).unwrap();
    assert_eq!(parse_transition(&spec).unwrap(), TransitionKind::Blend);
}
