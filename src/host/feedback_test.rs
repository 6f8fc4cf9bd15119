use super::*;

#[test]
fn taps_map_to_impacts() {
    for (haptic, style) in [(Haptic::Light, "light"), (Haptic::Medium, "medium"), (Haptic::Heavy, "heavy")] {
        assert_eq!(
            haptic.call(),
            HapticCall {
                method: "impactOccurred",
                style
            }
        );
    }
}

#[test]
fn outcomes_map_to_notifications() {
    for (haptic, style) in [
        (Haptic::Success, "success"),
        (Haptic::Warning, "warning"),
        (Haptic::Error, "error"),
    ] {
        assert_eq!(
            haptic.call(),
            HapticCall {
                method: "notificationOccurred",
                style
            }
        );
    }
}
