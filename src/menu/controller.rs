use crate::config::MenuConfig;
use crate::geom::{Point, lerp};
use crate::menu::layout::layout_ring;
use crate::menu::slot::Slot;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display, EnumString};

/// What `toggle` does while a furl/unfurl is still in flight. The stable
/// states always open from `Closed` and close from `Open`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, DeserializeFromStr, EnumString, Display,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum TogglePolicy {
    /// Cancel the running animation and play it back from the current frame.
    #[default]
    Reverse,
    /// Drop toggles until the animation settles.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum MenuState {
    #[default]
    Closed,
    Unfurling,
    Open,
    Furling,
}

type Hook = Box<dyn FnMut()>;

/// Frame-stepped radial menu. The host resizes the slot collection when ring
/// membership changes, calls [`RadialMenu::tick`] once per rendered frame,
/// and copies slot offsets back onto whatever it draws.
///
/// There is exactly one animation parameter and one driver, so starting a new
/// furl/unfurl overwrites any animation already in flight; two loops can
/// never fight over slot positions.
pub struct RadialMenu {
    config: MenuConfig,
    slots: Vec<Slot>,
    state: MenuState,
    t: f64,
    resolved_radius: f64,
    pivot: Point,
    depth: f64,
    root_visible: bool,
    pre_open: Vec<Hook>,
    post_close: Vec<Hook>,
}

impl RadialMenu {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
            state: MenuState::Closed,
            t: 0.0,
            resolved_radius: 0.0,
            pivot: Point::default(),
            depth: 0.0,
            root_visible: false,
            pre_open: Vec::new(),
            post_close: Vec::new(),
        }
    }

    /// Resizes the slot collection. The host calls this whenever ring
    /// membership changes; nothing is rescanned implicitly. New slots arrive
    /// enabled, parked at the pivot.
    pub fn sync_slots(&mut self, count: usize) {
        self.slots.resize(count, Slot::default());
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    /// True from the moment an unfurl starts until a furl fully settles.
    pub fn is_unfurled(&self) -> bool {
        self.state != MenuState::Closed
    }

    /// Whether the host should be showing the menu root at all.
    pub fn is_root_visible(&self) -> bool {
        self.root_visible
    }

    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Depth component the pivot keeps across [`RadialMenu::open_at`] moves.
    pub fn set_depth(&mut self, depth: f64) {
        self.depth = depth;
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Registers a hook fired right before a fresh unfurl starts.
    pub fn on_pre_open(&mut self, hook: impl FnMut() + 'static) {
        self.pre_open.push(Box::new(hook));
    }

    /// Registers a hook fired once a furl has fully settled and the root is
    /// hidden. [`RadialMenu::quick_close`] does not fire it.
    pub fn on_post_close(&mut self, hook: impl FnMut() + 'static) {
        self.post_close.push(Box::new(hook));
    }

    /// Starts the unfurl. A furl in flight reverses from its current frame
    /// without re-firing the pre-open hooks; calling this while already open
    /// or opening does nothing.
    pub fn open(&mut self) {
        match self.state {
            MenuState::Open | MenuState::Unfurling => {}
            MenuState::Furling => {
                log::debug!("menu: reversing furl at t={:.3}", self.t);
                self.state = MenuState::Unfurling;
            }
            MenuState::Closed => {
                Self::fire(&mut self.pre_open);
                self.resolved_radius = self.resolve_radius();
                self.t = 0.0;
                self.apply_layout(0.0, self.config.start_angle);
                self.root_visible = true;
                self.state = MenuState::Unfurling;
                log::debug!(
                    "menu: unfurling {} slots to radius {}",
                    self.active_count(),
                    self.resolved_radius
                );
            }
        }
    }

    /// Moves the pivot (the depth component stays put) and unfurls there.
    pub fn open_at(&mut self, position: Point) {
        self.pivot = position;
        self.open();
    }

    /// Starts the furl. An unfurl in flight reverses from its current frame;
    /// calling this while already closed or closing does nothing.
    pub fn close(&mut self) {
        match self.state {
            MenuState::Closed | MenuState::Furling => {}
            MenuState::Unfurling => {
                log::debug!("menu: reversing unfurl at t={:.3}", self.t);
                self.state = MenuState::Furling;
            }
            MenuState::Open => {
                self.resolved_radius = self.resolve_radius();
                self.t = 1.0;
                self.apply_layout(self.resolved_radius, self.config.end_angle);
                self.state = MenuState::Furling;
                log::debug!("menu: furling");
            }
        }
    }

    pub fn toggle(&mut self) {
        match (self.state, self.config.toggle_policy) {
            (MenuState::Closed, _) => self.open(),
            (MenuState::Open, _) => self.close(),
            (MenuState::Furling, TogglePolicy::Reverse) => self.open(),
            (MenuState::Unfurling, TogglePolicy::Reverse) => self.close(),
            (_, TogglePolicy::Ignore) => {}
        }
    }

    /// Snaps shut with no animation and no post-close hooks. Used when the
    /// surrounding surface goes away wholesale.
    pub fn quick_close(&mut self) {
        self.apply_layout(0.0, self.config.start_angle);
        self.t = 0.0;
        self.state = MenuState::Closed;
        self.root_visible = false;
        log::debug!("menu: quick close");
    }

    /// Advances the running animation by one frame and repositions every
    /// enabled slot. Returns whether an animation is still in flight; the
    /// stable states are a cheap no-op.
    pub fn tick(&mut self) -> bool {
        match self.state {
            MenuState::Closed | MenuState::Open => false,
            MenuState::Unfurling => {
                self.t = (self.t + self.config.step).min(1.0);
                if self.t >= 1.0 {
                    self.settle_open();
                    false
                } else {
                    self.apply_interpolated();
                    true
                }
            }
            MenuState::Furling => {
                self.t = (self.t - self.config.step).max(0.0);
                if self.t <= 0.0 {
                    self.settle_closed();
                    false
                } else {
                    self.apply_interpolated();
                    true
                }
            }
        }
    }

    /// Enables the first `count` slots and disables the rest.
    pub fn activate_count(&mut self, count: usize) {
        self.activate_count_with(count, |_, _| {});
    }

    /// Like [`RadialMenu::activate_count`], invoking `configure` with each
    /// slot and its index so the host can restyle ring members it knows by
    /// position.
    pub fn activate_count_with(
        &mut self,
        count: usize,
        mut configure: impl FnMut(usize, &mut Slot),
    ) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.enabled = i < count;
            configure(i, slot);
        }
    }

    fn fire(hooks: &mut [Hook]) {
        for hook in hooks {
            hook();
        }
    }

    fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.enabled).count()
    }

    /// Per-count radius lookup: entry `n - 1` serves `n` active slots. Falls
    /// back to the default radius when the table is empty or has no entry for
    /// the current count.
    fn resolve_radius(&self) -> f64 {
        if self.config.radii.is_empty() {
            return self.config.radius;
        }
        self.active_count()
            .checked_sub(1)
            .and_then(|i| self.config.radii.get(i))
            .copied()
            .unwrap_or(self.config.radius)
    }

    fn apply_layout(&mut self, radius: f64, end_deg: f64) {
        layout_ring(&mut self.slots, radius, self.config.start_angle, end_deg);
    }

    fn apply_interpolated(&mut self) {
        let radius = lerp(0.0, self.resolved_radius, self.t);
        let end = lerp(self.config.start_angle, self.config.end_angle, self.t);
        self.apply_layout(radius, end);
    }

    fn settle_open(&mut self) {
        self.apply_layout(self.resolved_radius, self.config.end_angle);
        self.state = MenuState::Open;
        log::debug!("menu: open");
    }

    fn settle_closed(&mut self) {
        self.apply_layout(0.0, self.config.start_angle);
        self.state = MenuState::Closed;
        self.root_visible = false;
        Self::fire(&mut self.post_close);
        log::debug!("menu: closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn config() -> MenuConfig {
        MenuConfig {
            step: 0.25,
            ..MenuConfig::default()
        }
    }

    fn menu(slot_count: usize) -> RadialMenu {
        let mut menu = RadialMenu::new(config());
        menu.sync_slots(slot_count);
        menu
    }

    fn ring_radius(menu: &RadialMenu) -> f64 {
        let slot = menu.slots()[0];
        slot.offset.x.hypot(slot.offset.y)
    }

    fn settle(menu: &mut RadialMenu) {
        for _ in 0..100 {
            if !menu.tick() {
                return;
            }
        }
        panic!("animation never settled");
    }

    #[test]
    fn test_open_runs_through_unfurling_to_open() {
        let mut menu = menu(4);
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_root_visible());

        menu.open();
        assert_eq!(menu.state(), MenuState::Unfurling);
        assert!(menu.is_root_visible());
        assert!(menu.is_unfurled());

        settle(&mut menu);
        assert_eq!(menu.state(), MenuState::Open);
        assert!((ring_radius(&menu) - crate::menu::DEFAULT_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn test_close_runs_through_furling_to_closed() {
        let mut menu = menu(4);
        menu.open();
        settle(&mut menu);

        menu.close();
        assert_eq!(menu.state(), MenuState::Furling);
        assert!(menu.is_root_visible());

        settle(&mut menu);
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_root_visible());
        assert_eq!(ring_radius(&menu), 0.0);
    }

    #[test]
    fn test_tick_is_noop_in_stable_states() {
        let mut menu = menu(4);
        assert!(!menu.tick());
        menu.open();
        settle(&mut menu);
        assert!(!menu.tick());
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn test_unfurl_radii_are_monotonic() {
        let mut menu = menu(4);
        menu.open();

        let mut last = ring_radius(&menu);
        assert_eq!(last, 0.0);
        while menu.tick() {
            let radius = ring_radius(&menu);
            assert!(radius >= last, "radius shrank during unfurl");
            last = radius;
        }
        assert!((ring_radius(&menu) - crate::menu::DEFAULT_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn test_furl_radii_are_monotonic() {
        let mut menu = menu(4);
        menu.open();
        settle(&mut menu);
        menu.close();

        let mut last = ring_radius(&menu);
        while menu.tick() {
            let radius = ring_radius(&menu);
            assert!(radius <= last, "radius grew during furl");
            last = radius;
        }
        assert_eq!(ring_radius(&menu), 0.0);
    }

    #[test]
    fn test_radius_table_resolution() {
        let mut menu = RadialMenu::new(MenuConfig {
            radii: vec![10.0, 20.0, 30.0],
            step: 0.25,
            ..MenuConfig::default()
        });
        menu.sync_slots(3);
        menu.activate_count(2);

        menu.open();
        settle(&mut menu);
        assert!((ring_radius(&menu) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_radius_table_out_of_range_falls_back() {
        let mut menu = RadialMenu::new(MenuConfig {
            radius: 75.0,
            radii: vec![10.0],
            step: 0.25,
            ..MenuConfig::default()
        });
        menu.sync_slots(5);

        menu.open();
        settle(&mut menu);
        assert!((ring_radius(&menu) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_quick_close_from_any_state() {
        for ticks in [0, 1, 2] {
            let mut menu = menu(4);
            menu.open();
            for _ in 0..ticks {
                menu.tick();
            }
            menu.quick_close();
            assert_eq!(menu.state(), MenuState::Closed);
            assert!(!menu.is_root_visible());
            assert_eq!(ring_radius(&menu), 0.0);
        }
    }

    #[test]
    fn test_open_while_opening_is_noop() {
        let mut menu = menu(4);
        menu.open();
        menu.tick();
        let t_before = menu.t;
        menu.open();
        assert_eq!(menu.state(), MenuState::Unfurling);
        assert_eq!(menu.t, t_before);
    }

    #[test]
    fn test_close_reverses_unfurl_in_place() {
        let mut menu = menu(4);
        menu.open();
        menu.tick();
        menu.tick();
        let t_mid = menu.t;

        menu.close();
        assert_eq!(menu.state(), MenuState::Furling);
        assert_eq!(menu.t, t_mid);

        settle(&mut menu);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_reverse_policy_in_flight() {
        let mut menu = menu(4);
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Unfurling);
        menu.tick();

        menu.toggle();
        assert_eq!(menu.state(), MenuState::Furling);
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Unfurling);

        settle(&mut menu);
        assert_eq!(menu.state(), MenuState::Open);
        menu.toggle();
        assert_eq!(menu.state(), MenuState::Furling);
    }

    #[test]
    fn test_toggle_ignore_policy_in_flight() {
        let mut menu = RadialMenu::new(MenuConfig {
            step: 0.25,
            toggle_policy: TogglePolicy::Ignore,
            ..MenuConfig::default()
        });
        menu.sync_slots(4);

        menu.toggle();
        assert_eq!(menu.state(), MenuState::Unfurling);
        menu.tick();

        menu.toggle();
        assert_eq!(menu.state(), MenuState::Unfurling);

        settle(&mut menu);
        assert_eq!(menu.state(), MenuState::Open);
    }

    #[test]
    fn test_hooks_fire_at_the_right_edges() {
        let mut menu = menu(4);
        let pre = Rc::new(Cell::new(0));
        let post = Rc::new(Cell::new(0));

        let pre_counter = pre.clone();
        menu.on_pre_open(move || pre_counter.set(pre_counter.get() + 1));
        let post_counter = post.clone();
        menu.on_post_close(move || post_counter.set(post_counter.get() + 1));

        menu.open();
        assert_eq!(pre.get(), 1);
        assert_eq!(post.get(), 0);

        settle(&mut menu);
        menu.close();
        assert_eq!(post.get(), 0);
        settle(&mut menu);
        assert_eq!(post.get(), 1);
    }

    #[test]
    fn test_reversal_does_not_refire_pre_open() {
        let mut menu = menu(4);
        let pre = Rc::new(Cell::new(0));
        let pre_counter = pre.clone();
        menu.on_pre_open(move || pre_counter.set(pre_counter.get() + 1));

        menu.open();
        settle(&mut menu);
        menu.close();
        menu.tick();
        menu.open();
        assert_eq!(pre.get(), 1);
    }

    #[test]
    fn test_quick_close_skips_post_close_hook() {
        let mut menu = menu(4);
        let post = Rc::new(Cell::new(0));
        let post_counter = post.clone();
        menu.on_post_close(move || post_counter.set(post_counter.get() + 1));

        menu.open();
        menu.tick();
        menu.quick_close();
        assert_eq!(post.get(), 0);
    }

    #[test]
    fn test_open_at_moves_pivot_and_keeps_depth() {
        let mut menu = menu(4);
        menu.set_depth(-3.0);
        menu.open_at(Point::new(40.0, 60.0));

        assert_eq!(menu.pivot(), Point::new(40.0, 60.0));
        assert_eq!(menu.depth(), -3.0);
        assert_eq!(menu.state(), MenuState::Unfurling);
    }

    #[test]
    fn test_activate_count_enables_prefix() {
        let mut menu = menu(5);
        let mut seen = Vec::new();
        menu.activate_count_with(3, |i, slot| {
            seen.push((i, slot.enabled));
        });

        assert_eq!(
            seen,
            vec![(0, true), (1, true), (2, true), (3, false), (4, false)]
        );
        assert_eq!(menu.slots().iter().filter(|s| s.enabled).count(), 3);
    }

    #[test]
    fn test_zero_slots_never_divides() {
        let mut menu = menu(0);
        menu.open();
        settle(&mut menu);
        assert_eq!(menu.state(), MenuState::Open);
        menu.close();
        settle(&mut menu);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_layout_sees_slots_added_mid_animation() {
        let mut menu = menu(2);
        menu.open();
        menu.tick();
        menu.sync_slots(6);

        settle(&mut menu);
        assert_eq!(menu.slots().len(), 6);
        for slot in menu.slots() {
            let radius = slot.offset.x.hypot(slot.offset.y);
            assert!((radius - crate::menu::DEFAULT_RADIUS).abs() < 1e-9);
        }
    }
}
