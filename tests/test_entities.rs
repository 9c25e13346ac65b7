use alien_invasion::entities::*;
use alien_invasion::settings::Settings;

fn settings() -> Settings {
    Settings::new(40.0, 20.0)
}

// ── Rect ──────────────────────────────────────────────────────────────────────

#[test]
fn rect_edges_and_center() {
    let r = Rect::new(2.0, 3.0, 4.0, 2.0);
    assert_eq!(r.right(), 6.0);
    assert_eq!(r.bottom(), 5.0);
    assert_eq!(r.center(), (4.0, 4.0));
}

#[test]
fn rect_intersection_is_strict() {
    let a = Rect::new(0.0, 0.0, 3.0, 1.0);
    assert!(a.intersects(&Rect::new(2.5, 0.5, 1.0, 1.0)));
    // Shared edge only
    assert!(!a.intersects(&Rect::new(3.0, 0.0, 1.0, 1.0)));
    assert!(!a.intersects(&Rect::new(0.0, 1.0, 1.0, 1.0)));
    // Symmetric
    let b = Rect::new(1.0, -0.5, 1.0, 1.0);
    assert_eq!(a.intersects(&b), b.intersects(&a));
}

#[test]
fn rect_contains_point_half_open() {
    let r = Rect::new(10.0, 5.0, 12.0, 3.0);
    assert!(r.contains_point(10.0, 5.0));
    assert!(r.contains_point(21.9, 7.9));
    assert!(!r.contains_point(22.0, 6.0));
    assert!(!r.contains_point(15.0, 8.0));
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn ship_starts_centered_at_bottom() {
    let ship = Ship::new(&settings());
    assert_eq!(ship.rect.x, 18.5);
    assert_eq!(ship.rect.y, 19.0);
    assert!(!ship.moving_left && !ship.moving_right);
}

#[test]
fn ship_direction_from_intent() {
    let mut ship = Ship::new(&settings());
    assert_eq!(ship.direction(), 0.0);
    ship.moving_left = true;
    assert_eq!(ship.direction(), -1.0);
    ship.moving_right = true;
    assert_eq!(ship.direction(), 0.0); // opposite keys cancel
    ship.moving_left = false;
    assert_eq!(ship.direction(), 1.0);
}

#[test]
fn ship_update_moves_by_ship_speed() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.moving_left = true;
    ship.update(&s);
    assert_eq!(ship.rect.x, 17.5);
}

#[test]
fn ship_clamped_to_left_edge() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.rect.x = 0.4;
    ship.moving_left = true;
    ship.update(&s);
    assert_eq!(ship.rect.x, 0.0);
    ship.update(&s);
    assert_eq!(ship.rect.x, 0.0);
}

#[test]
fn ship_clamped_to_right_edge() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.rect.x = 36.5;
    ship.moving_right = true;
    ship.update(&s);
    assert_eq!(ship.rect.x, 37.0);
    assert_eq!(ship.rect.right(), s.screen_width);
}

#[test]
fn ship_recenter() {
    let s = settings();
    let mut ship = Ship::new(&s);
    ship.rect.x = 2.0;
    ship.center(&s);
    assert_eq!(ship.rect.x, 18.5);
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[test]
fn bullet_moves_up_with_fixed_x() {
    let s = settings();
    let ship = Ship::new(&s);
    let mut bullet = Bullet::new(&ship, &s);
    let x = bullet.rect.x;
    bullet.update(&s);
    bullet.update(&s);
    assert_eq!(bullet.rect.x, x);
    assert!((bullet.rect.y - (19.0 - 2.0 * s.bullet_speed)).abs() < 1e-5);
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[test]
fn alien_moves_with_fleet_direction_and_toggles_frame() {
    let mut s = settings();
    let mut alien = Alien::new(10.0, 2.0);
    assert_eq!(alien.frame, AlienFrame::A);

    alien.update(&s);
    assert!((alien.rect.x - 10.2).abs() < 1e-5);
    assert_eq!(alien.frame, AlienFrame::B);

    s.fleet_direction = -1.0;
    alien.update(&s);
    assert!((alien.rect.x - 10.0).abs() < 1e-5);
    assert_eq!(alien.frame, AlienFrame::A);
}

#[test]
fn alien_edges() {
    assert!(!Alien::new(10.0, 0.0).check_edges(40.0));
    assert!(Alien::new(0.0, 0.0).check_edges(40.0));
    assert!(Alien::new(-0.5, 0.0).check_edges(40.0));
    assert!(Alien::new(37.0, 0.0).check_edges(40.0));
    assert!(!Alien::new(36.9, 0.0).check_edges(40.0));
}

#[test]
fn frame_toggle_round_trips() {
    assert_eq!(AlienFrame::A.toggled(), AlienFrame::B);
    assert_eq!(AlienFrame::A.toggled().toggled(), AlienFrame::A);
}
