use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{SegueError, SegueResult};
use crate::transition::kind::{Direction, SplitOrientation, TransitionKind};

/// A serializable transition descriptor: an effect name plus free-form JSON
/// parameters, the shape authoring tools and config files use.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    /// Effect family name (case-insensitive; see [`parse_transition`]).
    pub kind: String,
    /// Effect-specific parameters. Defaults to `null` (all defaults).
    #[serde(default)]
    pub params: serde_json::Value,
}

pub fn parse_transition(spec: &TransitionSpec) -> SegueResult<TransitionKind> {
    parse_transition_kind_params(&spec.kind, &spec.params)
}

pub fn parse_transition_kind_params(
    kind: &str,
    params: &serde_json::Value,
) -> SegueResult<TransitionKind> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(SegueError::serde("transition kind must be non-empty"));
    }

    let params = if params.is_null() {
        None
    } else {
        Some(params.as_object().ok_or_else(|| {
            SegueError::serde(format!("{kind} params must be an object when set"))
        })?)
    };

    match kind.as_str() {
        "blend" | "dissolve" | "crossfade" => Ok(TransitionKind::Blend),
        "wipe" => Ok(TransitionKind::Wipe {
            dir: parse_dir(params, Direction::LeftToRight)?,
        }),
        "push" => Ok(TransitionKind::Push {
            dir: parse_dir(params, Direction::LeftToRight)?,
        }),
        "split" => {
            let orientation = match params
                .and_then(|p| p.get("orientation"))
                .and_then(|v| v.as_str())
            {
                None => SplitOrientation::Horizontal,
                Some(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "horizontal" | "h" => SplitOrientation::Horizontal,
                    "vertical" | "v" => SplitOrientation::Vertical,
                    other => {
                        return Err(SegueError::serde(format!(
                            "unknown split.orientation '{other}'"
                        )));
                    }
                },
            };

            let out = match params.and_then(|p| p.get("out")) {
                None => false,
                Some(v) => v.as_bool().ok_or_else(|| {
                    SegueError::serde("split.out must be a boolean when set")
                })?,
            };

            Ok(TransitionKind::Split { orientation, out })
        }
        "fade" => {
            let color = match params.and_then(|p| p.get("color")).and_then(|v| v.as_str()) {
                None => Rgba8Premul::from_straight_rgba(0, 0, 0, 255),
                Some(s) => parse_hex_color(s)?,
            };
            Ok(TransitionKind::Fade { color })
        }
        _ => Err(SegueError::serde(format!(
            "unknown transition kind '{kind}'"
        ))),
    }
}

fn parse_dir(
    params: Option<&serde_json::Map<String, serde_json::Value>>,
    default: Direction,
) -> SegueResult<Direction> {
    match params.and_then(|p| p.get("dir")).and_then(|v| v.as_str()) {
        None => Ok(default),
        Some(s) => match s.trim().to_ascii_lowercase().as_str() {
            "left_to_right" | "lefttoright" | "ltr" => Ok(Direction::LeftToRight),
            "right_to_left" | "righttoleft" | "rtl" => Ok(Direction::RightToLeft),
            "top_to_bottom" | "toptobottom" | "ttb" => Ok(Direction::TopToBottom),
            "bottom_to_top" | "bottomtotop" | "btt" => Ok(Direction::BottomToTop),
            other => Err(SegueError::serde(format!("unknown dir '{other}'"))),
        },
    }
}

fn parse_hex_color(s: &str) -> SegueResult<Rgba8Premul> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(SegueError::serde("hex color must be ASCII"));
    }

    fn hex_byte(pair: &str) -> SegueResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| SegueError::serde(format!("invalid hex byte \"{pair}\"")))
    }

    let (r, g, b, a) = match s.len() {
        6 => (hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?, 255),
        8 => (
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        ),
        _ => {
            return Err(SegueError::serde(
                "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
            ));
        }
    };

    Ok(Rgba8Premul::from_straight_rgba(r, g, b, a))
}

#[cfg(test)]
#[path = "../../tests/unit/transition/parse.rs"]
mod tests;
