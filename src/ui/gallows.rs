/// Gallows drawing for each error level, from an empty hill to the full figure.
const STAGES: [[&str; 7]; 9] = [
    [
        "          ",
        "          ",
        "          ",
        "          ",
        "          ",
        "          ",
        "__________",
    ],
    [
        "          ",
        "  |       ",
        "  |       ",
        "  |       ",
        "  |       ",
        "  |       ",
        "__|_______",
    ],
    [
        "  _______ ",
        "  |       ",
        "  |       ",
        "  |       ",
        "  |       ",
        "  |       ",
        "__|_______",
    ],
    [
        "  _______ ",
        "  |/      ",
        "  |       ",
        "  |       ",
        "  |       ",
        "  |       ",
        "__|_______",
    ],
    [
        "  _______ ",
        "  |/    | ",
        "  |       ",
        "  |       ",
        "  |       ",
        "  |       ",
        "__|_______",
    ],
    [
        "  _______ ",
        "  |/    | ",
        "  |     O ",
        "  |       ",
        "  |       ",
        "  |       ",
        "__|_______",
    ],
    [
        "  _______ ",
        "  |/    | ",
        "  |     O ",
        "  |     | ",
        "  |       ",
        "  |       ",
        "__|_______",
    ],
    [
        "  _______ ",
        "  |/    | ",
        "  |     O ",
        "  |    /|\\",
        "  |       ",
        "  |       ",
        "__|_______",
    ],
    [
        "  _______ ",
        "  |/    | ",
        "  |     O ",
        "  |    /|\\",
        "  |    / \\",
        "  |       ",
        "__|_______",
    ],
];

/// Lines of the drawing for `level`; levels above 8 show the full figure.
pub fn stage(level: u8) -> &'static [&'static str] {
    let idx = usize::from(level).min(STAGES.len() - 1);
    &STAGES[idx]
}

pub fn height() -> u16 {
    STAGES[0].len() as u16
}
