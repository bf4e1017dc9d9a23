//! # Session Startup Tests
//!
//! Startup succeeds only with a complete registry, and the running session
//! keeps cards, placeholders and assets consistent.

use cardreel::cards::{CardError, Suit, ACE_HIGH};
use cardreel::ui::CarouselError;
use cardreel::{
    AppearanceManifest, CarouselConfig, HandSession, InertialScroll, PanelGeometry, PointerEvent,
    Rect, ScrollSurface, SessionError,
};

fn session() -> HandSession<InertialScroll> {
    HandSession::start(
        &AppearanceManifest::conventional("CardSprites"),
        CarouselConfig::default(),
        InertialScroll::new(),
        PanelGeometry::new(740.0, 900.0),
    )
    .unwrap()
}

#[test]
fn test_startup_binds_every_card() {
    let session = session();
    let pool = session.carousel().placeholders();

    assert_eq!(pool.len(), session.hand().cards().len());
    for placeholder in pool {
        let card = session.card_for(placeholder.id()).unwrap();
        assert_eq!(card.to_string(), placeholder.label());
    }
    assert_eq!(session.carousel().offset(), 0.0);
}

#[test]
fn test_ace_draws_low_slot_asset() {
    let session = session();
    let ace = session
        .hand()
        .iter()
        .find(|c| c.suit() == Suit::Spade && c.rank() == ACE_HIGH)
        .unwrap();
    let placeholder = session
        .carousel()
        .placeholders()
        .by_id(ace.transform().unwrap())
        .unwrap();

    assert_eq!(session.asset_key(placeholder), Some("CardSprites/Spade/0"));
}

#[test]
fn test_incomplete_manifest_aborts_startup() {
    let mut manifest = AppearanceManifest::conventional("CardSprites");
    manifest.club.truncate(5);

    let err = HandSession::start(
        &manifest,
        CarouselConfig::default(),
        InertialScroll::new(),
        PanelGeometry::new(740.0, 900.0),
    )
    .unwrap_err();

    assert_eq!(err, SessionError::Cards(CardError::IncompleteRegistry { missing: 8 }));
}

#[test]
fn test_bad_config_aborts_startup() {
    let config = CarouselConfig {
        card_width: -1.0,
        ..CarouselConfig::default()
    };
    let err = HandSession::start(
        &AppearanceManifest::conventional("CardSprites"),
        config,
        InertialScroll::new(),
        PanelGeometry::new(740.0, 900.0),
    )
    .unwrap_err();

    assert!(matches!(err, SessionError::Carousel(CarouselError::InvalidConfig(_))));
}

#[test]
fn test_wheel_event_triggers_wrap_check() {
    let mut session = session();
    let viewport = Rect::centered(0.0, 0.0, 1200.0, 300.0);

    // Nothing moved yet.
    assert_eq!(session.frame(1.0 / 60.0, &viewport), None);

    let last = session.carousel().placeholders().last().unwrap().id();
    let wrap = session.handle_event(PointerEvent::Scroll { delta: (0.0, -1.0) }, &viewport);

    let wrap = wrap.expect("last card crosses the right bound after one step");
    assert_eq!(wrap.placeholder, last);
    assert_eq!(session.carousel().placeholders().first().unwrap().id(), last);
}

#[test]
fn test_shipped_config_files_start_a_session() {
    let root = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config");
    let session = HandSession::from_files(
        format!("{root}/cards.toml"),
        format!("{root}/carousel.toml"),
        InertialScroll::new(),
        PanelGeometry::new(740.0, 900.0),
    )
    .unwrap();

    assert!(session.registry().is_complete());
    assert_eq!(session.carousel().config(), &CarouselConfig::default());
}

#[test]
fn test_missing_manifest_file_is_config_error() {
    let err = HandSession::from_files(
        "does/not/exist.toml",
        "does/not/exist_either.toml",
        InertialScroll::new(),
        PanelGeometry::new(740.0, 900.0),
    )
    .unwrap_err();

    assert!(matches!(err, SessionError::Cards(CardError::InvalidManifest(_))));
}

#[test]
fn test_fast_fling_keeps_strip_in_view() {
    const DT: f32 = 1.0 / 60.0;
    let mut session = session();
    let viewport = Rect::centered(0.0, 0.0, 1200.0, 300.0);
    let config = *session.carousel().config();
    let right_bound = 600.0 + config.bounds_threshold;
    let half_card = config.card_width * 0.5;

    session.handle_event(PointerEvent::BeginDrag { position: (0.0, 0.0) }, &viewport);
    session.handle_event(PointerEvent::Drag { position: (10.0, 0.0) }, &viewport);
    // About 3.5 card steps per frame at the start.
    session.carousel_mut().surface_mut().set_velocity((40_000.0, 0.0));
    session.handle_event(PointerEvent::EndDrag, &viewport);

    for frame in 0..420 {
        session.carousel_mut().surface_mut().integrate(DT);
        session.content_moved(&viewport);
        session.frame(DT, &viewport);

        let carousel = session.carousel();
        let xs: Vec<f32> = (0..carousel.placeholders().len())
            .map(|i| carousel.world_x(i).unwrap())
            .collect();

        assert_eq!(xs.len(), 8);
        for x in &xs {
            assert!(x - half_card <= right_bound, "frame {frame}: card at {x} left past the bound");
        }
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - config.step()).abs() < 0.05, "frame {frame}: gap broken {xs:?}");
        }
        assert!(xs.iter().any(|x| x.abs() < 600.0), "frame {frame}: viewport empty {xs:?}");
    }

    assert!(session.carousel().offset() > 10_000.0);
}
