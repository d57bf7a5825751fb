use boing::{BallScene, BallSceneConfig, NoOpStepObserver, Playground, SceneKind, Vec2};

#[test]
fn ball_scene_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut scene = BallScene::<f32>::new(BallSceneConfig::new().with_seed(42)).unwrap();
        for _ in 0..300 {
            scene.step(1.0 / 6.0, &mut NoOpStepObserver);
        }
        scene.balls().to_vec()
    }).collect();

    for r in &results[1..] {
        assert_eq!(&results[0], r);
    }
}

#[test]
fn different_seeds_differ() {
    let a = BallScene::<f32>::new(BallSceneConfig::new().with_seed(1)).unwrap();
    let b = BallScene::<f32>::new(BallSceneConfig::new().with_seed(2)).unwrap();
    assert_ne!(a.balls(), b.balls());
}

#[test]
fn every_scene_deterministic() {
    for kind in SceneKind::ALL {
        let results: Vec<Vec<Vec2<f64>>> = (0..3).map(|_| {
            let mut scene = Playground::<f64>::new(kind).unwrap();
            let dt = kind.default_timestep::<f64>().fixed_dt();
            for _ in 0..120 {
                scene.step(dt, &mut NoOpStepObserver);
            }
            scene.snapshot().bodies.iter().map(|b| b.position).collect()
        }).collect();

        for r in &results[1..] {
            for (a, b) in results[0].iter().zip(r.iter()) {
                assert_eq!(a.x, b.x, "{} diverged", kind);
                assert_eq!(a.y, b.y, "{} diverged", kind);
            }
        }
    }
}
