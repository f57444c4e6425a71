//! Navigation state machine.
//!
//! ```text
//!          start / auto-start on SEL
//!   Idle ───────────────────────────▶ InMenu ◀──────────┐
//!    ▲                                 │  SEL on field  │ session ends
//!    │ ESC at root / timeout           ▼                │ (SET or cancel)
//!    └──────────────────────────────  InEdit ───────────┘
//! ```
//!
//! The host calls [`Menu::run`] once per loop iteration. Each call polls the
//! navigation input at most once, processes that single action and renders
//! the result.

use heapless::Vec;

use super::defs::{InputField, ItemAction, MenuDefs, MenuHeader, MenuItem};
use super::editor::{EditEnv, EditSession};
use super::format;
use super::{DisplayRequest, MenuDisplay, MenuId, NavAction, NavInput, Value, ValueOp, ROOT_MENU};
use crate::config::{DEFAULT_INC_DELTA, MENU_STACK_SIZE};
use crate::error::Error;
use crate::inactivity::InactivityTimer;
use crate::ui::input_logic::{select_next, select_prev};

/// A header snapshot on the menu stack together with its cursor.
struct Frame<C> {
    header: MenuHeader<C>,
    /// Current item id; `None` until the menu is first shown.
    cursor: Option<MenuId>,
}

enum State<C> {
    Idle,
    InMenu,
    InEdit(EditSession<C>),
}

/// The menu engine.
///
/// Owns the host context `C` that value-request functions operate on, the
/// navigation input `N` and the display `D`. The definition tables are
/// borrowed for `'d` and never modified.
pub struct Menu<'d, C, N, D> {
    defs: MenuDefs<'d, C>,
    context: C,
    nav: N,
    display: D,
    stack: Vec<Frame<C>, MENU_STACK_SIZE>,
    state: State<C>,
    wrap: bool,
    auto_start: bool,
    timer: InactivityTimer,
}

impl<'d, C, N, D> Menu<'d, C, N, D>
where
    N: NavInput,
    D: MenuDisplay,
{
    /// Build an engine over `defs`. The tables are validated once here.
    pub fn new(defs: MenuDefs<'d, C>, context: C, nav: N, display: D) -> Result<Self, Error> {
        defs.validate()?;

        Ok(Self {
            defs,
            context,
            nav,
            display,
            stack: Vec::new(),
            state: State::Idle,
            wrap: false,
            auto_start: false,
            timer: InactivityTimer::new(0),
        })
    }

    /// Advance the menu by one tick.
    ///
    /// `start` (re)starts the menu at the root. `now_ms` is a monotonic
    /// timestamp used for the inactivity timeout. Returns `true` while the
    /// menu is running.
    pub fn run(&mut self, start: bool, now_ms: u64) -> bool {
        if !start && !self.is_running() {
            if !self.auto_start {
                return false;
            }
            let mut delta = DEFAULT_INC_DELTA;
            if self.nav.next_action(&mut delta) != NavAction::Sel {
                return false;
            }
            info!("menu: auto start");
        }

        if start || !self.is_running() {
            info!("menu: starting");
            self.start(now_ms);
            return self.is_running();
        }

        if self.is_in_edit() {
            self.edit_tick(now_ms);
        } else {
            self.menu_tick(now_ms);
        }

        if self.is_running() && self.timer.expired(now_ms) {
            info!("menu: inactivity timeout");
            self.reset();
        }

        if !self.is_running() {
            self.display.display(DisplayRequest::Clear);
            info!("menu: ended");
        }

        self.is_running()
    }

    /// Stop the menu and forget the navigation path.
    ///
    /// An edit in progress is dropped without SET.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.stack.clear();
    }

    /// `true` while the menu is browsing or editing.
    pub fn is_running(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// `true` while browsing a menu (not while editing a field).
    pub fn is_in_menu(&self) -> bool {
        matches!(self.state, State::InMenu)
    }

    /// `true` while a field is being edited.
    pub fn is_in_edit(&self) -> bool {
        matches!(self.state, State::InEdit(_))
    }

    /// Wrap around at both ends of menus and pick lists. Default off.
    pub fn set_menu_wrap(&mut self, wrap: bool) {
        self.wrap = wrap;
    }

    /// Start the menu when SELECT is seen while idle. Default off.
    pub fn set_auto_start(&mut self, auto_start: bool) {
        self.auto_start = auto_start;
    }

    /// Inactivity timeout in milliseconds; 0 disables it (default).
    pub fn set_timeout(&mut self, timeout_ms: u32) {
        self.timer.set_timeout(timeout_ms);
    }

    /// Replace the navigation input, returning the previous one.
    pub fn set_nav_input(&mut self, nav: N) -> N {
        core::mem::replace(&mut self.nav, nav)
    }

    /// Replace the display, returning the previous one.
    pub fn set_display(&mut self, display: D) -> D {
        core::mem::replace(&mut self.display, display)
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn nav_input_mut(&mut self) -> &mut N {
        &mut self.nav
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Current menu depth; the root menu is depth 0.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    pub fn current_header_id(&self) -> Option<MenuId> {
        self.stack.last().map(|f| f.header.id)
    }

    pub fn current_item_id(&self) -> Option<MenuId> {
        self.stack.last().and_then(|f| f.cursor)
    }

    /// The field being edited, if any.
    pub fn editing(&self) -> Option<&EditSession<C>> {
        match &self.state {
            State::InEdit(session) => Some(session),
            _ => None,
        }
    }

    fn start(&mut self, now_ms: u64) {
        self.reset();

        let Some(root) = self.defs.find_header(ROOT_MENU) else {
            warn!("menu: no root menu");
            return;
        };
        let _ = self.stack.push(Frame {
            header: root,
            cursor: None,
        });
        self.enter_menu(now_ms);
    }

    /// Show the menu on top of the stack from scratch.
    fn enter_menu(&mut self, now_ms: u64) {
        let Some(frame) = self.stack.last_mut() else {
            self.state = State::Idle;
            return;
        };
        if !frame.cursor.is_some_and(|c| frame.header.contains(c)) {
            frame.cursor = Some(frame.header.item_start);
        }
        let header = frame.header;

        if let Some(notify) = header.notify {
            notify(&mut self.context, header.id, ValueOp::Get);
        }

        debug!("menu: enter header {} at depth {}", header.id, self.depth());
        self.display.display(DisplayRequest::Clear);
        self.display.display(DisplayRequest::Line0(header.label));
        self.state = State::InMenu;
        self.timer.restart(now_ms);
        self.render_item(false);
    }

    fn menu_tick(&mut self, now_ms: u64) {
        let mut delta = DEFAULT_INC_DELTA;
        let nav = self.nav.next_action(&mut delta);
        if nav != NavAction::None {
            self.timer.restart(now_ms);
        }

        match nav {
            NavAction::Inc | NavAction::Dec => {
                if self.move_cursor(nav == NavAction::Inc) {
                    self.render_item(false);
                }
            }
            NavAction::Sel => self.select(now_ms),
            NavAction::Esc => self.escape(now_ms),
            NavAction::Help => {
                if self.current_item().is_some_and(|item| item.help.is_some()) {
                    self.render_item(true);
                }
            }
            NavAction::None => {}
        }
    }

    /// Step the cursor; returns `true` if it moved.
    fn move_cursor(&mut self, forward: bool) -> bool {
        let wrap = self.wrap;
        let Some(frame) = self.stack.last_mut() else {
            return false;
        };
        let Some(current) = frame.cursor else {
            return false;
        };

        let (first, last) = (i32::from(frame.header.item_start), i32::from(frame.header.item_end));
        let next = if forward {
            select_next(i32::from(current), first, last, wrap)
        } else {
            select_prev(i32::from(current), first, last, wrap)
        };
        let next = MenuId::try_from(next).unwrap_or(current);

        frame.cursor = Some(next);
        next != current
    }

    fn select(&mut self, now_ms: u64) {
        let Some(item) = self.current_item() else {
            warn!("menu: no current item to select");
            return;
        };

        match item.action {
            ItemAction::Menu(target) => {
                if self.stack.is_full() {
                    warn!("menu: depth limit reached, ignoring menu {}", target);
                    return;
                }
                let Some(header) = self.defs.find_header(target) else {
                    warn!("menu: header {} not found", target);
                    return;
                };
                let _ = self.stack.push(Frame {
                    header,
                    cursor: None,
                });
                self.enter_menu(now_ms);
            }
            ItemAction::Input(field_id) => {
                let Some(field) = self.defs.find_field(field_id) else {
                    warn!("menu: input field {} not found", field_id);
                    return;
                };
                self.enter_edit(item, field, now_ms);
            }
        }
    }

    /// Leave the current menu: one level up, or stop at the root.
    fn escape(&mut self, now_ms: u64) {
        if self.stack.len() <= 1 {
            debug!("menu: escape from root");
            self.reset();
            return;
        }

        if let Some(frame) = self.stack.pop() {
            if let Some(notify) = frame.header.notify {
                notify(&mut self.context, frame.header.id, ValueOp::Set(Value::Empty));
            }
        }
        self.enter_menu(now_ms);
    }

    fn enter_edit(&mut self, item: MenuItem, field: InputField<C>, now_ms: u64) {
        self.display.display(DisplayRequest::Clear);
        self.display.display(DisplayRequest::Line0(item.label));
        self.timer.restart(now_ms);

        let mut session = EditSession::new(field);
        let outcome = session.start(&mut EditEnv {
            context: &mut self.context,
            display: &mut self.display,
            wrap: self.wrap,
            delta: DEFAULT_INC_DELTA,
        });

        if outcome.is_finished() {
            self.enter_menu(now_ms);
        } else {
            self.state = State::InEdit(session);
        }
    }

    fn edit_tick(&mut self, now_ms: u64) {
        let mut delta = DEFAULT_INC_DELTA;
        let nav = self.nav.next_action(&mut delta);
        if nav == NavAction::None {
            return;
        }
        self.timer.restart(now_ms);

        let State::InEdit(session) = &mut self.state else {
            return;
        };
        let outcome = session.handle(
            nav,
            &mut EditEnv {
                context: &mut self.context,
                display: &mut self.display,
                wrap: self.wrap,
                delta,
            },
        );

        if outcome.is_finished() {
            debug!("menu: edit ended");
            self.enter_menu(now_ms);
        }
    }

    fn current_item(&self) -> Option<MenuItem> {
        self.current_item_id().and_then(|id| self.defs.find_item(id))
    }

    fn render_item(&mut self, with_help: bool) {
        let Some(item) = self.current_item() else {
            warn!("menu: current item missing");
            return;
        };

        if with_help {
            if let Some(help) = item.help {
                self.display.display(DisplayRequest::Help(help));
            }
        }
        let line = format::wrap_menu_item(item.label);
        self.display.display(DisplayRequest::Line1(&line));
    }
}
