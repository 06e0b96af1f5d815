//! End-to-end properties: button presses through the widget to the display

use proptest::prelude::*;
use tonecalc::prelude::*;

fn widget() -> CalculatorWidget<MockDom, ToneLog> {
    CalculatorWidget::new(MockDom::calculator(), ToneLog::new())
}

fn expression(w: &CalculatorWidget<MockDom, ToneLog>) -> String {
    w.host()
        .get_element_text("display-input")
        .unwrap_or_default()
        .to_string()
}

fn result(w: &CalculatorWidget<MockDom, ToneLog>) -> String {
    w.host()
        .get_element_text("display-result")
        .unwrap_or_default()
        .to_string()
}

fn any_button() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "0",
        "1",
        "2",
        "3",
        "4",
        "5",
        "6",
        "7",
        "8",
        "9",
        ".",
        "+",
        "-",
        "*",
        "/",
        "=",
        "C",
        "Backspace",
        "%",
    ])
}

proptest! {
    /// The painted display always matches a fresh render of the state
    #[test]
    fn prop_display_tracks_state(buttons in prop::collection::vec(any_button(), 0..40)) {
        let mut w = widget();
        for b in &buttons {
            w.handle_button(b);
        }
        let view = render(w.state());
        prop_assert_eq!(expression(&w), view.expression);
        prop_assert_eq!(result(&w), view.result);
    }

    /// One tone per accepted button, none for rejected ones
    #[test]
    fn prop_one_tone_per_press(buttons in prop::collection::vec(any_button(), 0..40)) {
        let mut w = widget();
        for b in &buttons {
            w.handle_button(b);
        }
        prop_assert_eq!(w.tone().len(), buttons.len());
    }

    /// Clear always restores the initial display
    #[test]
    fn prop_clear_restores_display(buttons in prop::collection::vec(any_button(), 0..40)) {
        let mut w = widget();
        for b in &buttons {
            w.handle_button(b);
        }
        w.handle_button("C");
        prop_assert_eq!(expression(&w), "0");
        prop_assert_eq!(result(&w), "0");
        prop_assert_eq!(w.state(), &CalculatorState::default());
    }

    /// The input buffer never holds more than one decimal point
    #[test]
    fn prop_single_decimal_point(buttons in prop::collection::vec(any_button(), 0..40)) {
        let mut w = widget();
        for b in &buttons {
            w.handle_button(b);
            prop_assert!(w.state().input.matches('.').count() <= 1);
            prop_assert!(!w.state().input.is_empty());
        }
    }

    /// Once the error marker shows, only Clear changes anything
    #[test]
    fn prop_error_lockout(buttons in prop::collection::vec(any_button(), 0..20)) {
        let mut w = widget();
        for b in ["9", "/", "0", "="] {
            w.handle_button(b);
        }
        prop_assert_eq!(result(&w), ERROR_MARKER);
        let locked = w.state().clone();
        for b in buttons.iter().filter(|b| **b != "C") {
            w.handle_button(b);
        }
        prop_assert_eq!(w.state(), &locked);
    }

    /// Two-operand results match f64 arithmetic, formatted
    #[test]
    fn prop_binary_results(a in 0u32..100_000, b in 1u32..100_000, op in prop::sample::select(Operator::ALL.to_vec())) {
        let mut w = widget();
        for ch in a.to_string().chars() {
            w.press(Token::from_char(ch).unwrap());
        }
        w.press(Token::Operator(op));
        for ch in b.to_string().chars() {
            w.press(Token::from_char(ch).unwrap());
        }
        w.press(Token::Equals);
        let expected = op.apply(f64::from(a), f64::from(b)).unwrap();
        prop_assert_eq!(result(&w), format_number(expected, NumberFormat::Grouped));
    }
}

#[test]
fn test_keyboard_and_buttons_agree() {
    let mut by_button = widget();
    let mut by_key = widget();
    for b in ["1", "2", ".", "5", "*", "4", "="] {
        by_button.handle_button(b);
    }
    for k in ["1", "2", ".", "5", "*", "4", "Enter"] {
        by_key.handle_key(k);
    }
    assert_eq!(result(&by_button), "50");
    assert_eq!(result(&by_key), "50");
    assert_eq!(by_button.state(), by_key.state());
}

#[test]
fn test_escape_matches_clear_button() {
    let mut w = widget();
    for k in ["7", "+", "Escape"] {
        assert!(w.handle_key(k));
    }
    assert_eq!(w.state(), &CalculatorState::default());
}

#[test]
fn test_large_product_goes_exponential() {
    let mut w = widget();
    for b in ["9", "9", "9", "9", "9", "*", "9", "9", "9", "9", "9", "9", "="] {
        w.handle_button(b);
    }
    assert_eq!(result(&w), "1.00e+11");
}
