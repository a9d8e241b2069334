use ratatui::backend::TestBackend;
use ratatui::Terminal;

use rangeslider_core::WidgetConfig;
use rangeslider_tui::{ui, AppState, HostConfig};

fn app(values: Vec<f64>, precision: f64) -> AppState {
    let mut app = AppState::new(HostConfig {
        widget: WidgetConfig::new("price").with_precision(precision),
        values: Some(values),
    });
    app.start();
    app
}

fn render(app: &AppState) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect()
}

#[test]
fn renders_tooltips_pips_and_footer() {
    let app = app(vec![0.0, 40.0, 100.0], 1.0);
    let screen = render(&app).join("\n");

    assert!(screen.contains("price"));
    assert!(screen.contains("100.0"));
    assert!(screen.contains("50.0"), "positions pip at 50%");
    assert!(screen.contains("Matches: 3 / 3"));
    assert!(screen.contains('●'));
}

#[test]
fn blank_cells_use_theme_background() {
    let app = app(vec![0.0, 100.0], 1.0);
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(79, 9)].bg, app.theme.background);
    assert_eq!(buffer[(40, 0)].bg, app.theme.background);
}

#[test]
fn disabled_slider_renders_hollow_handles() {
    let app = app(vec![5.0, 5.0], 0.0);
    let screen = render(&app).join("\n");
    assert!(screen.contains('○'));
    assert!(!screen.contains('●'));
}

#[test]
fn click_on_track_snaps_nearest_handle() {
    let mut app = app(vec![0.0, 100.0], 1.0);
    render(&app);

    // track spans columns 2..78 on row 2 inside the bordered body
    assert!(app.surface.click(62, 2));
    let [lo, hi] = app.surface.values().unwrap();
    assert_eq!(lo, 0.0);
    assert!((hi - 80.0).abs() < 1e-9);

    app.drain_commands();
    let [_, refined_hi] = app.connector.start();
    assert!((refined_hi - 80.0).abs() < 1e-9);
}

#[test]
fn clicks_off_the_track_are_ignored() {
    let app = app(vec![0.0, 100.0], 1.0);
    render(&app);
    assert!(!app.surface.click(62, 5));
    assert_eq!(app.surface.values(), Some([0.0, 100.0]));
}

mod properties {
    use proptest::prelude::*;
    use rangeslider_core::{PipsMode, PipsSpec, Range};
    use rangeslider_tui::ui::widgets::slider::pip_marks;

    use super::app;

    proptest! {
        /// Any sequence of nudges keeps handles ordered and inside the range.
        #[test]
        fn nudges_never_cross_handles(
            moves in prop::collection::vec((any::<bool>(), -30i32..30), 1..40),
        ) {
            let a = app(vec![0.0, 100.0], 0.0);
            for (upper, steps) in moves {
                a.surface.select_handle(usize::from(upper));
                a.surface.nudge(steps);
                let [lo, hi] = a.surface.values().unwrap();
                prop_assert!(0.0 <= lo && lo <= hi && hi <= 100.0);
            }
        }

        /// Pip marks are sorted and on the track.
        #[test]
        fn pip_fractions_on_track(
            min in -1_000.0..1_000.0_f64,
            width in 0.5..2_000.0_f64,
            count in 2.0..12.0_f64,
            density in 1u32..20,
        ) {
            let spec = PipsSpec {
                mode: PipsMode::Count,
                values: vec![count.floor()],
                density: Some(density),
                stepped: Some(true),
            };
            let marks = pip_marks(&spec, Range::new(min, min + width), 0.5);
            prop_assert!(marks.windows(2).all(|w| w[0].fraction <= w[1].fraction));
            prop_assert!(marks.iter().all(|m| (0.0..=1.0).contains(&m.fraction)));
        }
    }
}
