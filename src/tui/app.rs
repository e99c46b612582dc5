//! Application state for the TUI
//!
//! The App struct holds the base tables plus everything the views and key
//! handler need: the active tab, the filter selection, and the sidebar
//! cursor. Filtered views are recomputed from the base tables on every
//! render; at these sizes that is cheaper than tracking staleness.

use std::collections::HashSet;

use crate::compare::ExpenseTable;

/// Which tab is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    Travel,
    TeamBuilding,
    Combined,
}

impl ActiveTab {
    pub const ALL: [ActiveTab; 3] = [
        ActiveTab::Travel,
        ActiveTab::TeamBuilding,
        ActiveTab::Combined,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            ActiveTab::Travel => "Travel Expenses",
            ActiveTab::TeamBuilding => "Team Building",
            ActiveTab::Combined => "Combined View",
        }
    }

    pub const fn index(&self) -> usize {
        match self {
            ActiveTab::Travel => 0,
            ActiveTab::TeamBuilding => 1,
            ActiveTab::Combined => 2,
        }
    }

    pub const fn next(&self) -> Self {
        match self {
            ActiveTab::Travel => ActiveTab::TeamBuilding,
            ActiveTab::TeamBuilding => ActiveTab::Combined,
            ActiveTab::Combined => ActiveTab::Travel,
        }
    }

    pub const fn prev(&self) -> Self {
        match self {
            ActiveTab::Travel => ActiveTab::Combined,
            ActiveTab::TeamBuilding => ActiveTab::Travel,
            ActiveTab::Combined => ActiveTab::TeamBuilding,
        }
    }
}

/// Main application state
pub struct App<'a> {
    /// The full Travel table, never mutated
    pub travel: &'a ExpenseTable,

    /// The full Team Building table, never mutated
    pub team: &'a ExpenseTable,

    /// Sorted union of both tables' verticals, the sidebar rows
    pub all_verticals: Vec<String>,

    /// Whether the "Select All" checkbox is on
    pub select_all: bool,

    /// Individually checked verticals (only consulted when select_all is off)
    pub selected: HashSet<String>,

    /// Currently active tab
    pub active_tab: ActiveTab,

    /// Sidebar cursor: 0 is "Select All", then one row per vertical
    pub sidebar_index: usize,

    /// Whether the breakdown overlay is open
    pub show_breakdown: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App over the two base tables
    pub fn new(travel: &'a ExpenseTable, team: &'a ExpenseTable) -> Self {
        let mut all_verticals: Vec<String> = travel
            .verticals()
            .chain(team.verticals())
            .map(str::to_string)
            .collect();
        all_verticals.sort();
        all_verticals.dedup();

        Self {
            travel,
            team,
            all_verticals,
            select_all: true,
            selected: HashSet::new(),
            active_tab: ActiveTab::default(),
            sidebar_index: 0,
            show_breakdown: false,
            should_quit: false,
        }
    }

    /// The current keep-set for filtering.
    ///
    /// "Select All" and an empty individual selection both produce the
    /// empty set, which `ExpenseTable::filter` treats as no filter.
    pub fn keep_set(&self) -> HashSet<String> {
        if self.select_all {
            HashSet::new()
        } else {
            self.selected.clone()
        }
    }

    /// Both tables filtered to the current selection
    pub fn filtered(&self) -> (ExpenseTable, ExpenseTable) {
        let keep = self.keep_set();
        (self.travel.filter(&keep), self.team.filter(&keep))
    }

    /// Number of sidebar rows (Select All plus one per vertical)
    pub fn sidebar_len(&self) -> usize {
        self.all_verticals.len() + 1
    }

    /// Whether a vertical renders as checked in the sidebar
    pub fn is_checked(&self, vertical: &str) -> bool {
        self.select_all || self.selected.contains(vertical)
    }

    pub fn sidebar_up(&mut self) {
        if self.sidebar_index > 0 {
            self.sidebar_index -= 1;
        }
    }

    pub fn sidebar_down(&mut self) {
        if self.sidebar_index + 1 < self.sidebar_len() {
            self.sidebar_index += 1;
        }
    }

    /// Toggle the sidebar row under the cursor
    pub fn toggle_current(&mut self) {
        if self.sidebar_index == 0 {
            self.toggle_select_all();
            return;
        }
        let vertical = self.all_verticals[self.sidebar_index - 1].clone();
        if self.select_all {
            // Leaving select-all mode: start from just this vertical
            self.select_all = false;
            self.selected.clear();
            self.selected.insert(vertical);
        } else if !self.selected.remove(&vertical) {
            self.selected.insert(vertical);
        }
    }

    /// Toggle the "Select All" checkbox, dropping individual picks
    pub fn toggle_select_all(&mut self) {
        self.select_all = !self.select_all;
        self.selected.clear();
    }
}
