use super::*;
use std::cell::Cell;

#[test]
fn can_measure_duration_with_callback() {
    let reported = Cell::new(None);

    let result = Timer::measure_duration_with_callback(|| 2 + 2, |duration| reported.set(Some(duration)));

    assert_eq!(result, 4);
    assert!(reported.get().is_some());
}

#[test]
fn can_measure_elapsed_time() {
    let timer = Timer::start();

    std::thread::sleep(Duration::from_millis(5));

    assert!(timer.elapsed() >= Duration::from_millis(5));
}
