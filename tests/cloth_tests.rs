use boing::{
    ClothConfig, ClothNode, ClothScene, DistanceLink, NoOpStepObserver, PinPattern, PointerEvent,
    StepStats, Vec2,
};

#[test]
fn pinned_corners_hold_while_middle_sags() {
    let mut cloth = ClothScene::<f32>::new(ClothConfig::new()).unwrap();
    let last = cloth.cols() - 1;
    let corners = [(0, 0), (last, 0), (0, last), (last, last)];
    let corner_initial: Vec<_> = corners.iter().map(|&(c, r)| cloth.position_at(c, r)).collect();
    let middle_initial = cloth.position_at(5, 5);

    for _ in 0..120 {
        cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    }

    for (&(c, r), init) in corners.iter().zip(&corner_initial) {
        assert_eq!(cloth.position_at(c, r), *init, "corner ({}, {}) moved", c, r);
    }
    let middle = cloth.position_at(5, 5);
    assert!(middle.y > middle_initial.y, "middle should sag: {} -> {}", middle_initial.y, middle.y);
}

#[test]
fn top_row_pins_drape_under_gravity() {
    let config = ClothConfig::new()
        .with_grid(5, 5)
        .with_spacing(10.0)
        .with_origin(Vec2::new(0.0, 0.0))
        .with_pins(PinPattern::TopRow)
        .with_gravity(Vec2::new(0.0, 200.0))
        .with_iterations(8);
    let mut cloth = ClothScene::<f32>::new(config).unwrap();
    let bottom = cloth.rows() - 1;
    let bottom_initial: Vec<_> = (0..cloth.cols()).map(|c| cloth.position_at(c, bottom)).collect();

    for _ in 0..120 {
        cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    }

    for col in 0..cloth.cols() {
        assert_eq!(cloth.position_at(col, 0), Vec2::new(col as f32 * 10.0, 0.0));
        assert!(cloth.position_at(col, bottom).y > bottom_initial[col].y);
    }
}

#[test]
fn relaxation_counts_iterations() {
    let mut cloth = ClothScene::<f64>::new(ClothConfig::new().with_iterations(5)).unwrap();
    let mut stats = StepStats::default();
    cloth.step(1.0 / 60.0, &mut stats);
    cloth.step(1.0 / 60.0, &mut stats);
    assert_eq!(stats.relaxation_passes, 10);
    assert_eq!(stats.steps, 2);
    assert_eq!(stats.degenerate_skips, 0);
}

#[test]
fn held_link_converges_monotonically() {
    let mut nodes = [ClothNode::pinned(Vec2::new(0.0f64, 0.0)), ClothNode::new(Vec2::new(50.0, 0.0))];
    let link = DistanceLink::from_nodes(0, 1, &nodes);
    nodes[1].pos = Vec2::new(90.0, 0.0);

    let mut previous = link.stretch(&nodes);
    for _ in 0..10 {
        link.solve(&mut nodes);
        let stretch = link.stretch(&nodes);
        assert!(stretch >= 0.0, "overshot rest length: {}", stretch);
        assert!(stretch < previous);
        previous = stretch;
    }
    assert!(previous < 0.05);
}

#[test]
fn compressed_free_link_recovers_in_one_pass() {
    let mut nodes = [ClothNode::new(Vec2::new(0.0f64, 0.0)), ClothNode::new(Vec2::new(30.0, 40.0))];
    let link = DistanceLink::from_nodes(0, 1, &nodes);
    nodes[1].pos = Vec2::new(3.0, 4.0);

    assert!(link.solve(&mut nodes));
    assert!(link.stretch(&nodes).abs() < 1e-9);
}

#[test]
fn pointer_drags_a_node_and_releases_it() {
    let mut cloth = ClothScene::<f32>::new(ClothConfig::new()).unwrap();
    let target_node = cloth.index(4, 4);
    let start = cloth.position_at(4, 4);

    cloth.handle_pointer(PointerEvent::Down(start + Vec2::new(3.0, 3.0)));
    cloth.handle_pointer(PointerEvent::Move(Vec2::new(700.0, 100.0)));
    cloth.step(1.0 / 60.0, &mut NoOpStepObserver);

    assert!(cloth.node(target_node).grabbed);
    assert_eq!(cloth.node(target_node).pos, Vec2::new(700.0, 100.0));

    cloth.handle_pointer(PointerEvent::Up);
    cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    assert!(!cloth.node(target_node).grabbed);
}

#[test]
fn reset_restores_the_grid() {
    let mut cloth = ClothScene::<f32>::new(ClothConfig::new()).unwrap();
    let initial = cloth.positions();
    for _ in 0..30 {
        cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
    assert_ne!(cloth.positions(), initial);
    cloth.reset();
    assert_eq!(cloth.positions(), initial);
}

#[test]
fn regrabbing_another_node_frees_the_first() {
    let mut cloth = ClothScene::<f32>::new(ClothConfig::new()).unwrap();
    let first = cloth.index(4, 4);
    let second = cloth.index(6, 6);

    cloth.handle_pointer(PointerEvent::Down(cloth.position_at(4, 4)));
    cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    assert!(cloth.node(first).grabbed);

    // quick release and press on another node before the next frame
    cloth.handle_pointer(PointerEvent::Up);
    cloth.handle_pointer(PointerEvent::Down(cloth.position_at(6, 6)));
    cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    assert!(!cloth.node(first).grabbed);
    assert!(cloth.node(second).grabbed);

    cloth.handle_pointer(PointerEvent::Up);
    let held_at = cloth.node(first).pos;
    for _ in 0..30 {
        cloth.step(1.0 / 60.0, &mut NoOpStepObserver);
    }
    assert!(!cloth.node(second).grabbed);
    assert!(cloth.node(first).pos.y > held_at.y, "released node should sag again");
}
