//! A host loop written against the facade alone.

use scout::prelude::*;
use scout_test_utils::Terrain;

#[test]
fn facade_drives_a_small_mission() {
    let terrain = Terrain::parse("+++++\n+S+F+\n+++++").unwrap();
    let config = MissionConfig {
        bounds: terrain.bounds(),
        priorities: vec![scout::mission::DEFAULT_PRIORITIES[4]],
    };
    let mut mission = MissionController::new(config, terrain.start().unwrap()).unwrap();

    let mut at = mission.start();
    for _ in 0..5 {
        let seen = terrain.observe(at, 1);
        at = at.step(mission.decide(AgentId(0), &seen).unwrap());
    }
    assert_eq!(Some(at), terrain.finish());
    assert!(mission.is_complete());
    assert_eq!(mission.metrics().goal_searches, 1);
}
