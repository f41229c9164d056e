use std::collections::HashSet;

use pretty_assertions::assert_eq;
use webtop_runtime::{
    reduce_desktop, AppKind, DesktopAction, DesktopConfig, DesktopState, FocusHandoff,
    StackPolicy, WindowId, WindowPosition, WindowSize,
};

/// Small deterministic generator so failures reproduce from the seed alone.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }

    fn range(&mut self, low: i32, high: i32) -> i32 {
        low + self.below((high - low) as usize) as i32
    }
}

fn config(focus_handoff: FocusHandoff, stack_policy: StackPolicy) -> DesktopConfig {
    DesktopConfig {
        focus_handoff,
        stack_policy,
        ..DesktopConfig::default()
    }
}

fn all_configs() -> Vec<DesktopConfig> {
    let mut configs = Vec::new();
    for handoff in [FocusHandoff::None, FocusHandoff::TopmostVisible] {
        for stack in [StackPolicy::KeepOrder, StackPolicy::RaiseOnFocus] {
            configs.push(config(handoff, stack));
        }
    }
    configs
}

/// Picks a known id most of the time and a stale or never-issued id otherwise.
fn pick_id(rng: &mut Lcg, state: &DesktopState, issued: &[WindowId]) -> WindowId {
    let windows = state.windows();
    if !windows.is_empty() && rng.below(4) != 0 {
        return windows[rng.below(windows.len())].id;
    }
    if !issued.is_empty() && rng.below(2) == 0 {
        return issued[rng.below(issued.len())];
    }
    WindowId(10_000 + rng.next() % 100)
}

fn random_action(rng: &mut Lcg, state: &DesktopState, issued: &[WindowId]) -> DesktopAction {
    match rng.below(9) {
        0 | 1 => DesktopAction::OpenWindow {
            kind: AppKind::ALL[rng.below(AppKind::ALL.len())],
        },
        2 => DesktopAction::CloseWindow {
            window_id: pick_id(rng, state, issued),
        },
        3 => DesktopAction::MinimizeWindow {
            window_id: pick_id(rng, state, issued),
        },
        4 => DesktopAction::RestoreWindow {
            window_id: pick_id(rng, state, issued),
        },
        5 => DesktopAction::FocusWindow {
            window_id: pick_id(rng, state, issued),
        },
        6 => DesktopAction::UpdatePosition {
            window_id: pick_id(rng, state, issued),
            position: WindowPosition {
                x: rng.range(-400, 1600),
                y: rng.range(-400, 1200),
            },
        },
        7 => DesktopAction::UpdateSize {
            window_id: pick_id(rng, state, issued),
            size: WindowSize {
                width: rng.range(-50, 1400),
                height: rng.range(-50, 1000),
            },
        },
        _ => {
            if rng.below(2) == 0 {
                DesktopAction::ToggleLauncher
            } else {
                DesktopAction::CloseLauncher
            }
        }
    }
}

fn assert_invariants(state: &DesktopState, config: &DesktopConfig, context: &str) {
    let windows = state.windows();

    let ids: HashSet<_> = windows.iter().map(|w| w.id).collect();
    assert_eq!(ids.len(), windows.len(), "duplicate ids: {context}");

    let active = windows.iter().filter(|w| w.active).count();
    let visible = windows.iter().filter(|w| !w.minimized).count();
    assert!(active <= 1, "more than one active window: {context}");
    if visible == 0 {
        assert_eq!(active, 0, "active window with none visible: {context}");
    } else if config.focus_handoff == FocusHandoff::TopmostVisible {
        assert_eq!(active, 1, "visible windows but none active: {context}");
    }

    assert!(
        windows.iter().all(|w| !(w.minimized && w.active)),
        "minimized window is active: {context}"
    );

    let min = config.min_window_size();
    assert!(
        windows
            .iter()
            .all(|w| w.size.width >= min.width && w.size.height >= min.height),
        "window below minimum size: {context}"
    );
}

#[test]
fn random_operation_sequences_preserve_registry_invariants() {
    for config in all_configs() {
        for seed in 0..24_u64 {
            let mut rng = Lcg(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ 0xD1B5);
            let mut state = DesktopState::new(config.clone());
            let mut issued: Vec<WindowId> = Vec::new();

            for step in 0..400 {
                let action = random_action(&mut rng, &state, &issued);
                let before = state.clone();
                reduce_desktop(&mut state, action.clone());
                let context = format!("{config:?} seed={seed} step={step} action={action:?}");

                for window in state.windows() {
                    if before.registry.get(window.id).is_none() {
                        assert!(
                            !issued.contains(&window.id),
                            "id reused: {context}"
                        );
                        issued.push(window.id);
                    }
                }
                assert_invariants(&state, &config, &context);
            }
        }
    }
}

#[test]
fn opening_distinct_kinds_cascades_from_origin() {
    let mut state = DesktopState::default();
    for kind in AppKind::ALL {
        reduce_desktop(&mut state, DesktopAction::OpenWindow { kind });
    }

    let positions: Vec<_> = state.windows().iter().map(|w| w.position).collect();
    let expected: Vec<_> = (0..AppKind::ALL.len() as i32)
        .map(|step| WindowPosition {
            x: 100 + 20 * step,
            y: 100 + 20 * step,
        })
        .collect();
    assert_eq!(positions, expected);
}

#[test]
fn reopening_a_visible_kind_reuses_its_window() {
    for config in all_configs() {
        let mut state = DesktopState::new(config);
        for kind in [AppKind::Calculator, AppKind::Notes, AppKind::Terminal] {
            reduce_desktop(&mut state, DesktopAction::OpenWindow { kind });
        }
        let notes = state.windows()[1].id;

        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                kind: AppKind::Notes,
            },
        );

        assert_eq!(state.windows().len(), 3);
        assert_eq!(state.focused_window_id(), Some(notes));
    }
}

#[test]
fn restoring_an_active_window_twice_is_idempotent() {
    for config in all_configs() {
        let mut state = DesktopState::new(config);
        for kind in [AppKind::Settings, AppKind::Calculator] {
            reduce_desktop(&mut state, DesktopAction::OpenWindow { kind });
        }
        let settings = state.windows()[0].id;

        reduce_desktop(&mut state, DesktopAction::RestoreWindow { window_id: settings });
        let once = state.clone();
        let effects = reduce_desktop(&mut state, DesktopAction::RestoreWindow { window_id: settings });

        assert_eq!(state, once);
        assert!(effects.is_empty());
    }
}

#[test]
fn minimize_then_restore_brings_window_back_on_top_of_focus() {
    let mut state = DesktopState::default();
    reduce_desktop(
        &mut state,
        DesktopAction::OpenWindow {
            kind: AppKind::Calculator,
        },
    );
    reduce_desktop(
        &mut state,
        DesktopAction::OpenWindow {
            kind: AppKind::Notes,
        },
    );
    let calc = state.windows()[0].id;
    let notes = state.windows()[1].id;

    reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: calc });
    reduce_desktop(&mut state, DesktopAction::RestoreWindow { window_id: calc });

    let calc_window = state.registry.get(calc).expect("calculator");
    let notes_window = state.registry.get(notes).expect("notes");
    assert!(calc_window.active && !calc_window.minimized);
    assert!(!notes_window.active);
}

#[test]
fn closing_the_only_window_empties_the_registry() {
    let mut state = DesktopState::default();
    reduce_desktop(
        &mut state,
        DesktopAction::OpenWindow {
            kind: AppKind::Terminal,
        },
    );
    let terminal = state.windows()[0].id;

    reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: terminal });

    assert!(state.windows().is_empty());
    assert_eq!(state.focused_window_id(), None);
}
