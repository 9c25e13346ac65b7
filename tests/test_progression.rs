use alien_invasion::settings::*;
use alien_invasion::stats::GameStats;

fn settings() -> Settings {
    Settings::new(80.0, 22.0)
}

// ── Settings ──────────────────────────────────────────────────────────────────

#[test]
fn new_settings_start_at_base_values() {
    let s = settings();
    assert_eq!(s.ship_speed, BASE_SHIP_SPEED);
    assert_eq!(s.bullet_speed, BASE_BULLET_SPEED);
    assert_eq!(s.alien_speed, BASE_ALIEN_SPEED);
    assert_eq!(s.alien_points, BASE_ALIEN_POINTS);
    assert_eq!(s.fleet_direction, 1.0);
    assert_eq!(s.screen_width, 80.0);
    assert_eq!(s.screen_height, 22.0);
}

#[test]
fn increase_speed_scales_speeds_and_points() {
    let mut s = settings();
    s.increase_speed();
    assert!((s.ship_speed - BASE_SHIP_SPEED * SPEEDUP_SCALE).abs() < 1e-5);
    assert!((s.bullet_speed - BASE_BULLET_SPEED * SPEEDUP_SCALE).abs() < 1e-5);
    assert!((s.alien_speed - BASE_ALIEN_SPEED * SPEEDUP_SCALE).abs() < 1e-5);
    assert_eq!(s.alien_points, 75);
}

#[test]
fn increase_speed_floors_points() {
    let mut s = settings();
    s.increase_speed(); // 75
    s.increase_speed(); // 112.5 → 112
    assert_eq!(s.alien_points, 112);
    s.increase_speed(); // 168
    assert_eq!(s.alien_points, 168);
}

#[test]
fn increase_speed_leaves_static_settings_alone() {
    let mut s = settings();
    s.fleet_direction = -1.0;
    s.increase_speed();
    assert_eq!(s.fleet_direction, -1.0);
    assert_eq!(s.fleet_drop_speed, FLEET_DROP_SPEED);
    assert_eq!(s.bullets_allowed, BULLETS_ALLOWED);
}

#[test]
fn reset_dynamic_undoes_progression() {
    let mut s = settings();
    for _ in 0..5 {
        s.increase_speed();
    }
    s.fleet_direction = -1.0;
    s.reset_dynamic();
    assert_eq!(s, settings());
}

// ── GameStats ─────────────────────────────────────────────────────────────────

#[test]
fn stats_start_fresh() {
    let stats = GameStats::new(&settings(), 700);
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, 1);
    assert_eq!(stats.ships_left, SHIP_LIMIT);
    assert_eq!(stats.high_score, 700);
    assert_eq!(stats.extra_lives_awarded, 0);
}

#[test]
fn reset_stats_keeps_high_score() {
    let s = settings();
    let mut stats = GameStats::new(&s, 700);
    stats.score = 900;
    stats.check_high_score();
    stats.level = 3;
    stats.ships_left = 0;
    stats.extra_lives_awarded = 2;
    stats.reset_stats(&s);
    assert_eq!(stats.high_score, 900);
    assert_eq!(stats, GameStats::new(&s, 900));
}

#[test]
fn high_score_only_moves_up() {
    let mut stats = GameStats::new(&settings(), 100);
    stats.score = 80;
    assert_eq!(stats.check_high_score(), None);
    assert_eq!(stats.high_score, 100);

    stats.score = 100;
    assert_eq!(stats.check_high_score(), None);

    stats.score = 120;
    assert_eq!(stats.check_high_score(), Some(true));
    assert_eq!(stats.high_score, 120);

    stats.score = 150;
    assert_eq!(stats.check_high_score(), Some(false));
    assert_eq!(stats.high_score, 150);

    stats.score = 0;
    assert_eq!(stats.check_high_score(), None);
    assert_eq!(stats.high_score, 150);
}

#[test]
fn extra_life_thresholds_double() {
    let s = settings();
    let mut stats = GameStats::new(&s, 0);
    assert_eq!(stats.next_extra_life_threshold(&s), EXTRA_LIFE_AWARD);
    stats.extra_lives_awarded = 1;
    assert_eq!(stats.next_extra_life_threshold(&s), EXTRA_LIFE_AWARD * 2);
    stats.extra_lives_awarded = 3;
    assert_eq!(stats.next_extra_life_threshold(&s), EXTRA_LIFE_AWARD * 8);
}

#[test]
fn extra_life_awarded_once_per_threshold() {
    let s = settings();
    let mut stats = GameStats::new(&s, 0);
    stats.ships_left = 1;

    stats.score = EXTRA_LIFE_AWARD - 1;
    assert_eq!(stats.check_extra_life_award(&s), 0);

    stats.score = EXTRA_LIFE_AWARD;
    assert_eq!(stats.check_extra_life_award(&s), 1);
    assert_eq!(stats.ships_left, 2);
    // Same score again: nothing new
    assert_eq!(stats.check_extra_life_award(&s), 0);
    assert_eq!(stats.ships_left, 2);
}

#[test]
fn jump_across_several_thresholds_awards_each() {
    let s = settings();
    let mut stats = GameStats::new(&s, 0);
    stats.ships_left = 0;
    stats.score = EXTRA_LIFE_AWARD * 4;
    // 2000, 4000 and 8000 all crossed
    assert_eq!(stats.check_extra_life_award(&s), 3);
    assert_eq!(stats.extra_lives_awarded, 3);
    assert_eq!(stats.ships_left, 3);
}

#[test]
fn extra_life_never_exceeds_ship_limit() {
    let s = settings();
    let mut stats = GameStats::new(&s, 0);
    stats.score = EXTRA_LIFE_AWARD;
    assert_eq!(stats.check_extra_life_award(&s), 0);
    assert_eq!(stats.ships_left, SHIP_LIMIT);
    assert_eq!(stats.extra_lives_awarded, 0);
}

#[test]
fn pending_award_paid_once_a_ship_is_lost() {
    let s = settings();
    let mut stats = GameStats::new(&s, 0);
    stats.score = EXTRA_LIFE_AWARD * 4;
    assert_eq!(stats.check_extra_life_award(&s), 0);

    stats.ships_left -= 1;
    assert_eq!(stats.check_extra_life_award(&s), 1);
    assert_eq!(stats.ships_left, SHIP_LIMIT);
    assert_eq!(stats.next_extra_life_threshold(&s), EXTRA_LIFE_AWARD * 2);
}

#[test]
fn zero_award_threshold_disables_bonus_ships() {
    let mut s = settings();
    s.extra_life_award = 0;
    let mut stats = GameStats::new(&s, 0);
    stats.score = 5_000;
    assert_eq!(stats.check_extra_life_award(&s), 0);
}
