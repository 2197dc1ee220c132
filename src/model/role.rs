// Windows cursor roles and the fixed lookup tables that resolve them

use std::fmt;

/// A cursor purpose as named by the Windows scheme convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    Alternate,
    Busy,
    Cross,
    Default,
    Dgn1,
    Dgn2,
    Hand,
    Help,
    Horizontal,
    Link,
    Move,
    Text,
    Unavailable,
    Vertical,
    Work,
}

/// `install.inf` string keys, matched case-insensitively.
const DESCRIPTOR_KEYS: [(&str, Role); 15] = [
    ("pointer", Role::Default),
    ("help", Role::Help),
    ("working", Role::Work),
    ("busy", Role::Busy),
    ("precision", Role::Cross),
    ("text", Role::Text),
    ("hand", Role::Hand),
    ("unavailable", Role::Unavailable),
    ("vert", Role::Vertical),
    ("horz", Role::Horizontal),
    ("dgn1", Role::Dgn1),
    ("dgn2", Role::Dgn2),
    ("move", Role::Move),
    ("alternate", Role::Alternate),
    ("link", Role::Link),
];

/// Filename substrings per role. Order is priority: first hit wins.
pub const FILENAME_PATTERNS: [(Role, &[&str]); 15] = [
    (Role::Default, &["normal", "arrow", "default"]),
    (Role::Busy, &["busy", "wait"]),
    (Role::Text, &["text", "beam"]),
    (Role::Hand, &["handwriting", "hand"]),
    (Role::Link, &["link"]),
    (Role::Cross, &["precision", "cross"]),
    (Role::Move, &["move"]),
    (Role::Help, &["help"]),
    (Role::Unavailable, &["unavailable", "no"]),
    (Role::Vertical, &["vertical", "vert"]),
    (Role::Horizontal, &["horizontal", "horz"]),
    (Role::Dgn1, &["diagonal1", "dgn1"]),
    (Role::Dgn2, &["diagonal2", "dgn2"]),
    (Role::Work, &["working", "work", "progress"]),
    (Role::Alternate, &["alternate", "alt"]),
];

impl Role {
    pub const ALL: [Role; 15] = [
        Role::Alternate,
        Role::Busy,
        Role::Cross,
        Role::Default,
        Role::Dgn1,
        Role::Dgn2,
        Role::Hand,
        Role::Help,
        Role::Horizontal,
        Role::Link,
        Role::Move,
        Role::Text,
        Role::Unavailable,
        Role::Vertical,
        Role::Work,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Alternate => "Alternate",
            Role::Busy => "Busy",
            Role::Cross => "Cross",
            Role::Default => "Default",
            Role::Dgn1 => "Dgn1",
            Role::Dgn2 => "Dgn2",
            Role::Hand => "Hand",
            Role::Help => "Help",
            Role::Horizontal => "Horizontal",
            Role::Link => "Link",
            Role::Move => "Move",
            Role::Text => "Text",
            Role::Unavailable => "Unavailable",
            Role::Vertical => "Vertical",
            Role::Work => "Work",
        }
    }

    /// Parse a role name as written in a config file. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve the left-hand key of an `install.inf` association.
    pub fn from_descriptor_key(key: &str) -> Option<Role> {
        let key = key.to_lowercase();
        DESCRIPTOR_KEYS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, role)| *role)
    }

    /// The Xcursor names a theme expects this role's bitmap under.
    pub fn default_aliases(self) -> &'static [&'static str] {
        match self {
            Role::Alternate => &[
                "bottom_left_corner",
                "bottom_right_corner",
                "bottom_side",
                "down-arrow",
                "left-arrow",
                "left_side",
                "right-arrow",
                "right_side",
                "top_left_corner",
                "top_right_corner",
                "top_side",
                "up_arrow",
            ],
            Role::Busy => &["half-busy", "wait", "watch"],
            Role::Cross => &["cross", "crosshair"],
            Role::Default => &[
                "arrow",
                "default",
                "left_ptr",
                "size-bdiag",
                "size-fdiag",
                "size-hor",
                "size-ver",
                "top_left_arrow",
            ],
            Role::Dgn1 => &["nw-resize", "nwse-resize", "se-resize", "size_fdiag"],
            Role::Dgn2 => &["ne-resize", "nesw-resize", "sw-resize", "size_bdiag"],
            Role::Hand => &["draft", "pencil"],
            Role::Help => &["help", "left_ptr_help", "question_arrow", "whats_this"],
            Role::Horizontal => &[
                "col-resize",
                "e-resize",
                "ew-resize",
                "h_double_arrow",
                "sb_h_double_arrow",
                "size_hor",
                "split_h",
                "w-resize",
            ],
            Role::Link => &[
                "grab",
                "hand",
                "hand1",
                "hand2",
                "openhand",
                "pointer",
                "pointing_hand",
            ],
            Role::Move => &[
                "all-scroll",
                "closedhand",
                "dnd-move",
                "dnd-none",
                "fleur",
                "grabbing",
                "move",
                "size_all",
            ],
            Role::Text => &["ibeam", "text", "xterm"],
            Role::Unavailable => &[
                "circle",
                "crossed_circle",
                "dnd_no_drop",
                "forbidden",
                "no_drop",
                "not_allowed",
            ],
            Role::Vertical => &[
                "n-resize",
                "ns-resize",
                "row-resize",
                "s-resize",
                "sb_v_double_arrow",
                "size_ver",
                "split_v",
                "v_double_arrow",
            ],
            Role::Work => &["left_ptr_watch", "pirate", "progress"],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
