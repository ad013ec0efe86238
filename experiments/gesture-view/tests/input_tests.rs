use gesture_view::{HostClassifier, signal_for_key};
use minifb::Key;
use palm_base::Vec2;
use palm_gesture::{Classifier, GestureError};
use palm_image::Image;

fn frame() -> Image {
    Image::gray(Vec2::new(2, 2))
}

#[test]
fn test_number_keys() {
    assert_eq!(signal_for_key(Key::Key1), Some(1));
    assert_eq!(signal_for_key(Key::NumPad5), Some(5));
    assert_eq!(signal_for_key(Key::Key0), Some(0));
    assert_eq!(signal_for_key(Key::Space), None);
}

#[test]
fn test_keyboard_holds_count() {
    let mut classifier = HostClassifier::from_option(None).unwrap();
    assert_eq!(classifier.classify(&frame()).unwrap(), 0);

    assert_eq!(classifier.press(Key::Key2), Some(2));
    assert_eq!(classifier.press(Key::A), None);
    assert_eq!(classifier.classify(&frame()).unwrap(), 2);
    assert_eq!(classifier.classify(&frame()).unwrap(), 2);
}

#[test]
fn test_single_signal_still_follows_keys() {
    let mut classifier = HostClassifier::from_option(Some("5")).unwrap();
    assert_eq!(classifier.classify(&frame()).unwrap(), 5);
    classifier.press(Key::Key1);
    assert_eq!(classifier.classify(&frame()).unwrap(), 1);
}

#[test]
fn test_signal_list_loops_and_ignores_keys() {
    let mut classifier = HostClassifier::from_option(Some("1,2")).unwrap();
    assert_eq!(classifier.press(Key::Key5), None);
    let counts: Vec<i32> = (0..3)
        .map(|_| classifier.classify(&frame()).unwrap())
        .collect();
    assert_eq!(counts, vec![1, 2, 1]);
}

#[test]
fn test_bad_signal_list() {
    assert!(matches!(
        HostClassifier::from_option(Some("1,x")),
        Err(GestureError::Classify(_))
    ));
}
