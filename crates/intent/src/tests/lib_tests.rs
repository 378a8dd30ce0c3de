use super::*;

#[test]
fn zoom_in_with_mild_modifier() {
    assert_eq!(
        parse_phrase("увеличь чуть-чуть"),
        Some(Command::Zoom {
            factor: 1.1,
            ms: 300
        })
    );
}

#[test]
fn zoom_out_factor_is_reciprocal_and_rounded() {
    assert_eq!(
        parse_phrase("уменьши"),
        Some(Command::Zoom {
            factor: 0.83,
            ms: 300
        })
    );
    assert_eq!(
        parse_phrase("Zoom Out сильно"),
        Some(Command::Zoom {
            factor: 0.67,
            ms: 300
        })
    );
}

#[test]
fn strong_pan_right() {
    assert_eq!(
        parse_phrase("сильно вправо"),
        Some(Command::Pan {
            dx: 375.0,
            dy: 0.0,
            ms: 250
        })
    );
}

#[test]
fn pan_resolves_both_axes() {
    assert_eq!(
        parse_phrase("вниз и влево"),
        Some(Command::Pan {
            dx: -150.0,
            dy: 150.0,
            ms: 250
        })
    );
    assert_eq!(
        parse_phrase("немного вверх"),
        Some(Command::Pan {
            dx: 0.0,
            dy: -75.0,
            ms: 250
        })
    );
}

#[test]
fn sharpen_stem_inside_a_word_does_not_raise_intensity() {
    assert_eq!(
        parse_phrase("улучши резкость"),
        Some(Command::Sharpen { amount: 1.0 })
    );
}

#[test]
fn standalone_strong_word_is_both_modifier_and_sharpen_intent() {
    assert_eq!(parse_phrase("резко"), Some(Command::Sharpen { amount: 2.5 }));
}

#[test]
fn reset_and_fit() {
    assert_eq!(parse_phrase("верни оригинал"), Some(Command::ResetImage));
    assert_eq!(parse_phrase("  покажи целиком "), Some(Command::Fit { ms: 500 }));
}

#[test]
fn zoom_wins_over_later_categories() {
    assert_eq!(
        parse_phrase("приблизь и вправо"),
        Some(Command::Zoom {
            factor: 1.2,
            ms: 300
        })
    );
}

#[test]
fn mild_wins_when_both_tiers_present() {
    assert_eq!(Intensity::detect("сильно но немного"), Intensity::Mild);
    assert_eq!(Intensity::detect("максимум"), Intensity::Strong);
    assert_eq!(Intensity::detect("просто"), Intensity::Normal);
}

#[test]
fn unmatched_phrase_yields_nothing() {
    assert_eq!(parse_phrase("сделай красиво"), None);
    assert_eq!(parse_phrase(""), None);
}
