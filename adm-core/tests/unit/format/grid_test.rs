use super::*;
use crate::helpers::models::create_test_point_set;
use crate::models::Point;
use crate::utils::ErrorKind;
use proptest::prelude::*;

fn render(points: &[(&str, f64, f64)]) -> Grid {
    render_grid(&create_test_point_set(points), &GridSettings::default()).unwrap()
}

fn render_cropped(points: &[(&str, f64, f64)]) -> Grid {
    render_grid(&create_test_point_set(points), &GridSettings::default().with_anchor_origin(false)).unwrap()
}

#[test]
fn can_render_single_point_at_origin() {
    let grid = render(&[("a", 0., 0.)]);

    assert_eq!((grid.columns(), grid.rows()), (2, 2));
    assert_eq!(grid.cell(0, 0), Some("a"));
    assert_eq!(grid.cell(1, 0), Some("·"));
    assert_eq!(grid.cell(0, 1), Some("·"));
    assert_eq!(grid.cell(1, 1), Some("·"));
    assert_eq!(grid.to_string(), "a·\n··\n");
}

#[test]
fn can_render_points_with_margin() {
    let grid = render(&[("a", 0., 0.), ("b", 2., 1.)]);

    assert_eq!(grid.to_string(), "a···\n··b·\n····\n");
}

parameterized_test! {can_calculate_dimensions, (points, anchor_origin, expected_origin, expected_size), {
    let settings = GridSettings::default().with_anchor_origin(anchor_origin);

    let grid = render_grid(&create_test_point_set(points), &settings).unwrap();

    assert_eq!(grid.origin(), expected_origin);
    assert_eq!((grid.columns(), grid.rows()), expected_size);
}}

can_calculate_dimensions! {
    case_01_shifted_anchored: (&[("a", 3., 3.), ("b", 5., 7.)], true, (0, 0), (7, 9)),
    case_02_shifted_cropped: (&[("a", 3., 3.), ("b", 5., 7.)], false, (3, 3), (4, 6)),
    case_03_negative_anchored: (&[("a", -2., -1.), ("b", 1., 1.)], true, (-2, -1), (5, 4)),
    case_04_negative_cropped: (&[("a", -2., -1.), ("b", 1., 1.)], false, (-2, -1), (5, 4)),
    case_05_fractional_anchored: (&[("a", 0.1, 0.9), ("b", 1.9, 1.1)], true, (0, 0), (3, 3)),
    case_06_fractional_cropped: (&[("a", 0.1, 0.9), ("b", 1.9, 1.1)], false, (0, 0), (3, 2)),
    case_07_same_cell_anchored: (&[("a", 4.2, 4.2), ("b", 4.8, 4.8)], true, (0, 0), (6, 6)),
    case_08_same_cell_cropped: (&[("a", 4.2, 4.2), ("b", 4.8, 4.8)], false, (4, 4), (2, 2)),
}

#[test]
fn can_render_negative_coordinates() {
    let grid = render(&[("a", -2., -1.), ("b", 1., 1.)]);

    assert_eq!(grid.cell(0, 0), Some("a"));
    assert_eq!(grid.cell(3, 2), Some("b"));
    assert_eq!(grid.to_string(), "a····\n·····\n···b·\n·····\n");
}

#[test]
fn can_show_smallest_label_when_points_share_cell() {
    let grid = render(&[("b", 1.2, 1.7), ("a", 1.9, 1.1), ("c", 0., 0.)]);

    assert_eq!(grid.cell(1, 1), Some("a"));
    assert_eq!(grid.cell(0, 0), Some("c"));
}

#[test]
fn can_draw_shifted_points_from_origin_by_default() {
    let grid = render(&[("a", 3., 2.), ("b", 5., 4.)]);

    assert_eq!(grid.origin(), (0, 0));
    assert_eq!((grid.columns(), grid.rows()), (7, 6));
    assert_eq!(grid.cell(3, 2), Some("a"));
    assert_eq!(grid.cell(5, 4), Some("b"));
    assert_eq!(grid.to_string(), "·······\n·······\n···a···\n·······\n·····b·\n·······\n");
}

#[test]
fn can_crop_shifted_points_without_anchor() {
    let grid = render_cropped(&[("a", 3., 2.), ("b", 5., 4.)]);

    assert_eq!(grid.origin(), (3, 2));
    assert_eq!((grid.columns(), grid.rows()), (4, 4));
    assert_eq!(grid.to_string(), "a···\n····\n··b·\n····\n");
}

#[test]
fn can_align_columns_for_long_labels() {
    let grid = render(&[("a", 0., 0.), ("bb", 1., 0.), ("c", 2., 1.)]);

    assert_eq!(grid.cell(1, 0), Some("bb"));
    assert_eq!((grid.columns(), grid.rows()), (4, 3));
    assert_eq!(grid.to_string(), "a bb· · \n· · c · \n· · · · \n");
}

#[test]
fn can_render_empty_point_set() {
    let grid = render_grid(&PointSet::new(), &GridSettings::default().with_placeholder(Some('.'))).unwrap();

    assert_eq!(grid.to_string(), "..\n..\n");
}

#[test]
fn can_use_custom_placeholder() {
    let settings = GridSettings::default().with_placeholder(Some('-'));
    let points = create_test_point_set(&[("a", 0., 0.)]);

    let grid = render_grid(&points, &settings).unwrap();

    assert_eq!(grid.to_string(), "a-\n--\n");
}

#[test]
fn can_keep_default_placeholder_when_none_given() {
    assert_eq!(GridSettings::default().with_placeholder(None).placeholder, '·');
}

#[test]
fn can_reject_too_large_grid() {
    let points = create_test_point_set(&[("a", 0., 0.), ("b", 1e9, 1e9)]);

    let error = render_grid(&points, &GridSettings::default()).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidInput);
}

#[test]
fn can_return_none_for_cell_outside_grid() {
    let grid = render(&[("a", 0., 0.)]);

    assert_eq!(grid.cell(2, 0), None);
    assert_eq!(grid.cell(0, 2), None);
}

proptest! {
    #[test]
    fn can_render_every_point_inside_grid(
        coords in prop::collection::vec((-50.0_f64..50., -50.0_f64..50.), 1..30),
        anchor_origin in any::<bool>(),
    ) {
        let points = PointSet::with_points(
            coords.iter().enumerate().map(|(idx, &(x, y))| (format!("p{idx:02}"), Point::new(x, y)))
        ).unwrap();

        let grid = render_grid(&points, &GridSettings::default().with_anchor_origin(anchor_origin)).unwrap();

        let (init_min, init_max) = if anchor_origin { (0., 0.) } else { (f64::INFINITY, f64::NEG_INFINITY) };
        let extent = |values: Vec<f64>| {
            let min = values.iter().cloned().fold(init_min, f64::min);
            let max = values.iter().cloned().fold(init_max, f64::max);
            (max - min) as usize + 2
        };
        prop_assert_eq!(grid.columns(), extent(coords.iter().map(|c| c.0).collect()));
        prop_assert_eq!(grid.rows(), extent(coords.iter().map(|c| c.1).collect()));

        for (label, point) in points.iter() {
            let (x, y) = point.cell();
            let column = (x - grid.origin().0) as usize;
            let row = (y - grid.origin().1) as usize;

            let shown = grid.cell(column, row);
            prop_assert!(shown.is_some());
            prop_assert!(shown.unwrap() <= label);
        }
    }
}
