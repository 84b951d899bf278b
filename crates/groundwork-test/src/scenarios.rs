//! Areas with known minimum effort.

/// An area and the effort it must level at.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub rows: &'static [&'static str],
    pub expected: u32,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "single_row_ditch",
        rows: &["009"],
        expected: 8,
    },
    Scenario {
        name: "two_by_two",
        rows: &["10", "31"],
        expected: 2,
    },
    Scenario {
        name: "two_by_five",
        rows: &["54454", "61551"],
        expected: 7,
    },
    Scenario {
        name: "already_level",
        rows: &["989"],
        expected: 0,
    },
    Scenario {
        name: "cliff",
        rows: &["90"],
        expected: 8,
    },
    Scenario {
        name: "four_by_seven",
        rows: &["5781252", "2471255", "0000291", "1212489"],
        expected: 53,
    },
    Scenario {
        name: "single_cell",
        rows: &["5"],
        expected: 0,
    },
];
