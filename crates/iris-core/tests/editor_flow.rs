//! End-to-end editing session against the public API: the sequence a
//! workbench session walks through, from default document to derived
//! output and back.

use iris_core::{ColorStop, Gradient, StopUpdate, angle_from_direction, direction_from_angle};

#[test]
fn a_full_editing_session_derives_consistent_output() {
    let mut gradient = Gradient::default();

    // Author recolors the first stop and drags the second one inward.
    assert!(gradient.update_stop("1", StopUpdate::color("#8b5cf6")));
    assert!(gradient.update_stop("2", StopUpdate::position(60.0)));

    // A third stop lands 20% past the rightmost (60 + 20).
    let added = gradient.add_stop();
    assert_eq!(gradient.stops().len(), 3);
    assert!(gradient.update_stop(&added, StopUpdate::color("#ec4899")));
    assert!(gradient.update_stop(&added, StopUpdate::opacity(0.8)));

    // Slider writes a numeric direction; the resolver reads it back.
    gradient.set_direction(direction_from_angle(135));
    assert_eq!(gradient.direction(), "135deg");
    assert_eq!(angle_from_direction(gradient.direction()), 135);

    let css = gradient.to_css();
    assert!(css.starts_with("linear-gradient(135deg, "));
    assert!(css.contains("rgba(139,92,246,1) 0%"));
    assert!(css.contains("rgba(236,72,153,0.8) 80%"));

    // Custom angles have no utility token; endpoints come from stored order.
    assert_eq!(gradient.to_tailwind(), "bg-gradient-to-r from-[#8b5cf6] to-[#ec4899]");

    gradient.reset();
    assert_eq!(gradient, Gradient::default());
}

#[test]
fn saved_state_survives_a_load_edit_reload_cycle() {
    let saved_direction = "to bottom right";
    let saved_stops = vec![
        ColorStop::new("s1", "#667eea", 0.0, 1.0),
        ColorStop::new("s2", "#764ba2", 100.0, 1.0),
    ];

    let mut gradient = Gradient::default();
    gradient.load(saved_direction, saved_stops.clone());
    assert_eq!(
        gradient.to_css(),
        "linear-gradient(to bottom right, rgba(102,126,234,1) 0%, rgba(118,75,162,1) 100%)"
    );

    // Editing after the load never reaches back into the saved copy.
    gradient.update_stop("s1", StopUpdate::color("#000000"));
    gradient.set_direction("to top");
    assert_eq!(saved_stops[0].color, "#667eea");

    gradient.load(saved_direction, saved_stops.clone());
    assert_eq!(gradient.direction(), saved_direction);
    assert_eq!(gradient.stops(), saved_stops.as_slice());
}
