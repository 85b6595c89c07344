//! Ordered short-circuit checks of the wait policy.
//!
//! The play area is mocked so the tests can assert whether the final,
//! boundary-dependent check was reached at all.
use forager::wait::{GoReason, WaitDecision, WaitPolicy};
use forager::{AgentConfig, Meteor, MeteorColor, PlayArea};
use glam::Vec2;
use mockall::mock;
use rstest::{fixture, rstest};
use test_utils::fixtures::{grown_meteor, meteor, moving_meteor};

mock! {
    pub Area {}
    impl PlayArea for Area {
        fn contains(&self, point: Vec2) -> bool;
    }
}

#[fixture]
fn config() -> AgentConfig {
    AgentConfig {
        collection_distance: 9.0,
        closeness_factor: 2.0,
        meteor_lookahead: 2.0,
        plenty_of_meteors: 3,
        ..AgentConfig::default()
    }
}

/// A meteor that passes every check when the agent sits at the origin.
fn small_red() -> Meteor {
    moving_meteor(1, MeteorColor::Red, (1.0, 1.0), (1.0, 0.0))
}

fn policy<'a>(
    config: &'a AgentConfig,
    area: &'a dyn PlayArea,
    rival_need: MeteorColor,
    registered: usize,
    rival_position: Vec2,
) -> WaitPolicy<'a> {
    WaitPolicy {
        config,
        agent_position: Vec2::ZERO,
        rival_position,
        rival_need,
        registered,
        area,
    }
}

fn untouched_area() -> MockArea {
    let mut area = MockArea::new();
    area.expect_contains().times(0);
    area
}

#[rstest]
fn waits_only_when_every_check_passes(config: AgentConfig) {
    let mut area = MockArea::new();
    area.expect_contains()
        .withf(|p| (*p - Vec2::new(3.0, 1.0)).length() < 1e-5)
        .times(1)
        .return_const(true);
    let p = policy(&config, &area, MeteorColor::Blue, 1, Vec2::new(20.0, 20.0));
    assert_eq!(p.evaluate(&small_red()), WaitDecision::Wait);
}

#[rstest]
fn denial_short_circuits_everything_else(config: AgentConfig) {
    let area = untouched_area();
    let p = policy(&config, &area, MeteorColor::Red, 1, Vec2::new(20.0, 20.0));
    assert!(!p.should_wait(&small_red()));
    assert_eq!(p.evaluate(&small_red()), WaitDecision::Go(GoReason::DenyRival));
}

#[rstest]
fn far_small_lonely_target_of_rival_color_is_taken_now(config: AgentConfig) {
    let area = untouched_area();
    let far = moving_meteor(1, MeteorColor::Blue, (40.0, 0.0), (0.0, 1.0));
    let p = policy(&config, &area, MeteorColor::Blue, 1, Vec2::new(-20.0, 0.0));
    assert!(!p.should_wait(&far));
}

#[rstest]
#[case::plenty(4, GoReason::PlentyOfMeteors)]
#[case::exactly_three_is_not_plenty(3, GoReason::AlreadyGrown)]
fn registry_size_is_checked_before_growth(
    config: AgentConfig,
    #[case] registered: usize,
    #[case] expected: GoReason,
) {
    let area = untouched_area();
    let p = policy(&config, &area, MeteorColor::Blue, registered, Vec2::new(20.0, 20.0));
    let target = grown_meteor(1, MeteorColor::Red, (1.0, 1.0));
    assert_eq!(p.evaluate(&target), WaitDecision::Go(expected));
}

#[rstest]
fn too_far_to_loiter(config: AgentConfig) {
    let area = untouched_area();
    let p = policy(&config, &area, MeteorColor::Blue, 1, Vec2::new(20.0, 20.0));
    let target = moving_meteor(1, MeteorColor::Red, (3.0, 0.5), (1.0, 0.0));
    assert_eq!(p.evaluate(&target), WaitDecision::Go(GoReason::TooFar));
}

#[rstest]
#[case::rival_on_top(Vec2::new(1.0, 1.0), true)]
#[case::rival_scaled_inside(Vec2::new(3.0, 1.0), true)]
#[case::rival_scaled_outside(Vec2::new(4.0, 1.0), false)]
fn rival_closeness_is_scaled(config: AgentConfig, #[case] rival: Vec2, #[case] contested: bool) {
    // 2 * d² < 9 holds for d² = 0 and 4 but not for 9.
    let mut area = MockArea::new();
    area.expect_contains()
        .times(usize::from(!contested))
        .return_const(true);
    let p = policy(&config, &area, MeteorColor::Blue, 1, rival);
    let decision = p.evaluate(&small_red());
    if contested {
        assert_eq!(decision, WaitDecision::Go(GoReason::RivalClose));
    } else {
        assert_eq!(decision, WaitDecision::Wait);
    }
}

#[rstest]
fn meteor_about_to_leave_is_taken_now(config: AgentConfig) {
    let mut area = MockArea::new();
    area.expect_contains().times(1).return_const(false);
    let p = policy(&config, &area, MeteorColor::Blue, 1, Vec2::new(20.0, 20.0));
    assert_eq!(
        p.evaluate(&small_red()),
        WaitDecision::Go(GoReason::LeavingArea)
    );
}

#[rstest]
fn stationary_meteor_looks_ahead_onto_itself(config: AgentConfig) {
    let mut area = MockArea::new();
    area.expect_contains()
        .withf(|p| *p == Vec2::new(1.0, 1.0))
        .times(1)
        .return_const(true);
    let p = policy(&config, &area, MeteorColor::Blue, 1, Vec2::new(20.0, 20.0));
    let resting = meteor(1, MeteorColor::Red, (1.0, 1.0));
    assert_eq!(p.evaluate(&resting), WaitDecision::Wait);
}
