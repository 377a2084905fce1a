use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Display tone attached to tiers and breakdown entries. Front ends map it to
/// their own palette; `hex` gives the reference colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Positive,
    Info,
    Caution,
    Critical,
}

impl Tone {
    pub fn name(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Info => "info",
            Tone::Caution => "caution",
            Tone::Critical => "critical",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Positive => "#22c55e",
            Tone::Info => "#06B6D4",
            Tone::Caution => "#F59E0B",
            Tone::Critical => "#ff4757",
        }
    }
}

// Serialized as `{"name": ..., "color": ...}` so JSON consumers get the color.
impl Serialize for Tone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tone", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("color", self.hex())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_serializes_with_color() {
        let json = serde_json::to_value(Tone::Critical).unwrap();
        assert_eq!(json["name"], "critical");
        assert_eq!(json["color"], "#ff4757");
        assert_eq!(Tone::Positive.hex(), "#22c55e");
    }
}
