//! Static catalog of every animation sequence in the sprite atlas.
//!
//! Entries are keyed by [`AnimationId`]. Actors reach them indirectly through
//! [`ActorModel::sequence_id`], which maps a (direction, action) pose onto the
//! catalog. Kinds without a real idle or fire stance alias those slots to a
//! single-frame "N/A" sequence, so every pose of every actor kind resolves to
//! a valid sequence.

use serde::Serialize;

use super::{FrameSequence, ShapeIndex};

/// Facing direction of an actor or grid mover.
///
/// For sharks, which move diagonally, `Down` is SW, `Left` NW, `Up` NE and
/// `Right` SE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Direction {
    #[default]
    Down,
    Left,
    Up,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit step on the screen for this direction (y grows downwards).
    pub fn unit(self) -> (f32, f32) {
        match self {
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Up => (0.0, -1.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// What an actor is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Action {
    #[default]
    Idle,
    Move,
    Fire,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::Idle, Action::Move, Action::Fire];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Kinds of actor with a full direction x action sequence grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActorModel {
    Cuby,
    Coby,
    Bee,
    Worm,
    Shark,
    Ghost,
    Putty,
    Mouse,
    Penguin,
}

impl ActorModel {
    pub const ALL: [ActorModel; 9] = [
        ActorModel::Cuby,
        ActorModel::Coby,
        ActorModel::Bee,
        ActorModel::Worm,
        ActorModel::Shark,
        ActorModel::Ghost,
        ActorModel::Putty,
        ActorModel::Mouse,
        ActorModel::Penguin,
    ];

    /// Catalog entry for this actor kind in the given pose.
    pub fn sequence_id(self, direction: Direction, action: Action) -> AnimationId {
        MODEL_TABLE[self as usize][direction.index()][action.index()]
    }

    pub fn sequence(self, direction: Direction, action: Action) -> &'static FrameSequence {
        self.sequence_id(direction, action).sequence()
    }
}

macro_rules! sequence_catalog {
    ($( $id:ident => $name:literal, $seq:expr; )*) => {
        /// Name of one entry in the sequence catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub enum AnimationId {
            $( $id, )*
        }

        impl AnimationId {
            /// Every catalog entry, in declaration order.
            pub const ALL: &'static [AnimationId] = &[ $( AnimationId::$id, )* ];

            /// Upper-case debug name, e.g. `CUBY_DOWN_MOVE`.
            pub fn name(self) -> &'static str {
                match self {
                    $( AnimationId::$id => $name, )*
                }
            }

            pub fn sequence(self) -> &'static FrameSequence {
                match self {
                    $( AnimationId::$id => {
                        static SEQUENCE: FrameSequence = $seq;
                        &SEQUENCE
                    } )*
                }
            }
        }
    };
}

const fn once(frames: &'static [ShapeIndex]) -> FrameSequence {
    FrameSequence::once(frames)
}

const fn looped(frames: &'static [ShapeIndex]) -> FrameSequence {
    FrameSequence::looped(frames)
}

sequence_catalog! {
    // Cuby and Coby are the canonical actors
    CubyDownIdle => "CUBY_DOWN_IDLE", once(&[1]);
    CubyDownMove => "CUBY_DOWN_MOVE", looped(&[1, 2, 1, 0]);
    CubyDownFire => "CUBY_DOWN_FIRE", once(&[3]);
    CubyLeftIdle => "CUBY_LEFT_IDLE", once(&[5]);
    CubyLeftMove => "CUBY_LEFT_MOVE", looped(&[5, 6, 5, 4]);
    CubyLeftFire => "CUBY_LEFT_FIRE", once(&[7]);
    CubyUpIdle => "CUBY_UP_IDLE", once(&[9]);
    CubyUpMove => "CUBY_UP_MOVE", looped(&[9, 10, 9, 8]);
    CubyUpFire => "CUBY_UP_FIRE", once(&[11]);
    CubyRightIdle => "CUBY_RIGHT_IDLE", once(&[13]);
    CubyRightMove => "CUBY_RIGHT_MOVE", looped(&[13, 14, 13, 12]);
    CubyRightFire => "CUBY_RIGHT_FIRE", once(&[15]);
    CubyYahoo => "CUBY_NA_YAHOO", looped(&[16, 17, 18]);
    CobyDownIdle => "COBY_DOWN_IDLE", once(&[21]);
    CobyDownMove => "COBY_DOWN_MOVE", looped(&[21, 22, 21, 20]);
    CobyDownFire => "COBY_DOWN_FIRE", once(&[23]);
    CobyLeftIdle => "COBY_LEFT_IDLE", once(&[25]);
    CobyLeftMove => "COBY_LEFT_MOVE", looped(&[25, 26, 25, 24]);
    CobyLeftFire => "COBY_LEFT_FIRE", once(&[27]);
    CobyUpIdle => "COBY_UP_IDLE", once(&[29]);
    CobyUpMove => "COBY_UP_MOVE", looped(&[29, 30, 29, 28]);
    CobyUpFire => "COBY_UP_FIRE", once(&[31]);
    CobyRightIdle => "COBY_RIGHT_IDLE", once(&[33]);
    CobyRightMove => "COBY_RIGHT_MOVE", looped(&[33, 34, 33, 32]);
    CobyRightFire => "COBY_RIGHT_FIRE", once(&[35]);
    CobyYahoo => "COBY_NA_YAHOO", once(&[36, 37, 38]);
    // Bees have no real idle/fire stance
    BeeDownNa => "BEE_DOWN_NA", once(&[41]);
    BeeDownMove => "BEE_DOWN_MOVE", looped(&[41, 42, 41, 40]);
    BeeLeftNa => "BEE_LEFT_NA", once(&[44]);
    BeeLeftMove => "BEE_LEFT_MOVE", looped(&[44, 45, 44, 43]);
    BeeUpNa => "BEE_UP_NA", once(&[47]);
    BeeUpMove => "BEE_UP_MOVE", looped(&[47, 48, 47, 46]);
    BeeRightNa => "BEE_RIGHT_NA", once(&[50]);
    BeeRightMove => "BEE_RIGHT_MOVE", looped(&[50, 51, 50, 49]);
    // Worms only have long movement sequences
    WormNa => "WORM_NA_NA", once(&[60]);
    WormDownMove => "WORM_DOWN_MOVE", looped(&[52, 53, 54, 55, 56, 57, 58, 59]);
    WormLeftMove => "WORM_LEFT_MOVE", looped(&[60, 67, 66, 65, 64, 63, 62, 61]);
    WormUpMove => "WORM_UP_MOVE", looped(&[59, 58, 57, 56, 55, 54, 53, 52]);
    WormRightMove => "WORM_RIGHT_MOVE", looped(&[60, 61, 62, 63, 64, 65, 66, 67]);
    // Sharks move diagonally and have no idle/fire stance
    SharkDownNa => "SHARK_DOWN_NA", once(&[69]);
    SharkDownMove => "SHARK_DOWN_MOVE", looped(&[69, 70, 69, 68]);
    SharkLeftNa => "SHARK_LEFT_NA", once(&[72]);
    SharkLeftMove => "SHARK_LEFT_MOVE", looped(&[72, 73, 72, 71]);
    SharkUpNa => "SHARK_UP_NA", once(&[75]);
    SharkUpMove => "SHARK_UP_MOVE", looped(&[75, 76, 75, 74]);
    SharkRightNa => "SHARK_RIGHT_NA", looped(&[78]);
    SharkRightMove => "SHARK_RIGHT_MOVE", looped(&[78, 79, 78, 77]);
    // Ghosts have no dedicated idle stance
    GhostDownMove => "GHOST_DOWN_MOVE", once(&[80]);
    GhostDownFire => "GHOST_DOWN_FIRE", once(&[80, 81, 82]);
    GhostLeftMove => "GHOST_LEFT_MOVE", once(&[83]);
    GhostLeftFire => "GHOST_LEFT_FIRE", once(&[83, 84, 85]);
    GhostUpMove => "GHOST_UP_MOVE", once(&[86]);
    GhostUpFire => "GHOST_UP_FIRE", once(&[86, 87, 88]);
    GhostRightMove => "GHOST_RIGHT_MOVE", once(&[89]);
    GhostRightFire => "GHOST_RIGHT_FIRE", once(&[89, 90, 91]);
    PuttyDownIdle => "PUTTY_DOWN_IDLE", once(&[93]);
    PuttyDownMove => "PUTTY_DOWN_MOVE", looped(&[93, 94, 93, 92]);
    PuttyDownFire => "PUTTY_DOWN_FIRE", once(&[104]);
    PuttyLeftIdle => "PUTTY_LEFT_IDLE", once(&[96]);
    PuttyLeftMove => "PUTTY_LEFT_MOVE", looped(&[96, 97, 96, 95]);
    PuttyLeftFire => "PUTTY_LEFT_FIRE", once(&[105]);
    PuttyUpIdle => "PUTTY_UP_IDLE", once(&[99]);
    PuttyUpMove => "PUTTY_UP_MOVE", looped(&[99, 100, 99, 98]);
    PuttyUpFire => "PUTTY_UP_FIRE", once(&[106]);
    PuttyRightIdle => "PUTTY_RIGHT_IDLE", once(&[102]);
    PuttyRightMove => "PUTTY_RIGHT_MOVE", looped(&[102, 103, 102, 101]);
    PuttyRightFire => "PUTTY_RIGHT_FIRE", once(&[107]);
    MouseDownNa => "MOUSE_DOWN_NA", once(&[109]);
    MouseDownMove => "MOUSE_DOWN_MOVE", looped(&[109, 110, 109, 108]);
    MouseLeftNa => "MOUSE_LEFT_NA", once(&[112]);
    MouseLeftMove => "MOUSE_LEFT_MOVE", looped(&[112, 113, 112, 111]);
    MouseUpNa => "MOUSE_UP_NA", once(&[115]);
    MouseUpMove => "MOUSE_UP_MOVE", looped(&[115, 116, 115, 114]);
    MouseRightNa => "MOUSE_RIGHT_NA", once(&[118]);
    MouseRightMove => "MOUSE_RIGHT_MOVE", looped(&[118, 119, 118, 117]);
    PenguinDownIdle => "PENGUIN_DOWN_IDLE", once(&[121]);
    PenguinDownMove => "PENGUIN_DOWN_MOVE", looped(&[121, 122, 121, 120]);
    PenguinDownFire => "PENGUIN_DOWN_FIRE", once(&[132]);
    PenguinLeftIdle => "PENGUIN_LEFT_IDLE", once(&[124]);
    PenguinLeftMove => "PENGUIN_LEFT_MOVE", looped(&[124, 125, 124, 123]);
    PenguinLeftFire => "PENGUIN_LEFT_FIRE", once(&[133]);
    PenguinUpIdle => "PENGUIN_UP_IDLE", once(&[127]);
    PenguinUpMove => "PENGUIN_UP_MOVE", looped(&[127, 128, 127, 126]);
    PenguinUpFire => "PENGUIN_UP_FIRE", once(&[134]);
    PenguinRightIdle => "PENGUIN_RIGHT_IDLE", once(&[130]);
    PenguinRightMove => "PENGUIN_RIGHT_MOVE", looped(&[130, 131, 130, 129]);
    PenguinRightFire => "PENGUIN_RIGHT_FIRE", once(&[135]);
    // Non-actor effects
    BeeDead => "BEE_NA_DEAD", looped(&[136, 143, 150, 157]);
    WormDead => "WORM_NA_DEAD", looped(&[137, 144, 151, 158]);
    SharkDead => "SHARK_NA_DEAD", looped(&[138, 145, 152, 159]);
    GhostDead => "GHOST_NA_DEAD", looped(&[139, 146, 153, 160]);
    PuttyDead => "PUTTY_NA_DEAD", looped(&[140, 147, 154, 161]);
    MouseDead => "MOUSE_NA_DEAD", looped(&[141, 148, 155, 162]);
    PenguinDead => "PENGUIN_NA_DEAD", looped(&[142, 149, 156, 163]);
    BubbleShoot => "BUBBLE_NA_SHOOT",
        FrameSequence::with_loop_span(&[164, 164, 165, 166, 167, 168, 169, 170, 169], 4);
    BubblePop => "BUBBLE_NA_POP", once(&[173, 174, 175]);
    FlubberShoot => "FLUBBER_NA_SHOOT", looped(&[176, 177, 178, 179]);
    SnowballShoot => "SNOWBALL_NA_SHOOT", looped(&[180, 181, 182, 183]);
    SnowballPop => "SNOWBALL_NA_POP", once(&[184, 185, 186]);
    AnyPop => "ANY_NA_POP", once(&[187, 188, 189]);
    StarsPop => "STARS_NA_POP", once(&[223, 224, 225]);
    FlameSpin => "FLAME_NA_SPIN", looped(&[226, 227, 228, 229]);
    DustPop => "DUST_NA_POP", once(&[230, 231, 232]);
}

use AnimationId::*;

/// Actor kind -> direction -> action -> catalog entry.
static MODEL_TABLE: [[[AnimationId; 3]; 4]; 9] = [
    // Cuby
    [
        [CubyDownIdle, CubyDownMove, CubyDownFire],
        [CubyLeftIdle, CubyLeftMove, CubyLeftFire],
        [CubyUpIdle, CubyUpMove, CubyUpFire],
        [CubyRightIdle, CubyRightMove, CubyRightFire],
    ],
    // Coby
    [
        [CobyDownIdle, CobyDownMove, CobyDownFire],
        [CobyLeftIdle, CobyLeftMove, CobyLeftFire],
        [CobyUpIdle, CobyUpMove, CobyUpFire],
        [CobyRightIdle, CobyRightMove, CobyRightFire],
    ],
    // Bee (movement only)
    [
        [BeeDownNa, BeeDownMove, BeeDownNa],
        [BeeLeftNa, BeeLeftMove, BeeLeftNa],
        [BeeUpNa, BeeUpMove, BeeUpNa],
        [BeeRightNa, BeeRightMove, BeeRightNa],
    ],
    // Worm (movement only)
    [
        [WormNa, WormDownMove, WormNa],
        [WormNa, WormLeftMove, WormNa],
        [WormNa, WormUpMove, WormNa],
        [WormNa, WormRightMove, WormNa],
    ],
    // Shark (diagonal movement only)
    [
        [SharkDownNa, SharkDownMove, SharkDownNa],
        [SharkLeftNa, SharkLeftMove, SharkLeftNa],
        [SharkUpNa, SharkUpMove, SharkUpNa],
        [SharkRightNa, SharkRightMove, SharkRightNa],
    ],
    // Ghost (idles on its move stance)
    [
        [GhostDownMove, GhostDownMove, GhostDownFire],
        [GhostLeftMove, GhostLeftMove, GhostLeftFire],
        [GhostUpMove, GhostUpMove, GhostUpFire],
        [GhostRightMove, GhostRightMove, GhostRightFire],
    ],
    // Putty
    [
        [PuttyDownIdle, PuttyDownMove, PuttyDownFire],
        [PuttyLeftIdle, PuttyLeftMove, PuttyLeftFire],
        [PuttyUpIdle, PuttyUpMove, PuttyUpFire],
        [PuttyRightIdle, PuttyRightMove, PuttyRightFire],
    ],
    // Mouse (movement only)
    [
        [MouseDownNa, MouseDownMove, MouseDownNa],
        [MouseLeftNa, MouseLeftMove, MouseLeftNa],
        [MouseUpNa, MouseUpMove, MouseUpNa],
        [MouseRightNa, MouseRightMove, MouseRightNa],
    ],
    // Penguin
    [
        [PenguinDownIdle, PenguinDownMove, PenguinDownFire],
        [PenguinLeftIdle, PenguinLeftMove, PenguinLeftFire],
        [PenguinUpIdle, PenguinUpMove, PenguinUpFire],
        [PenguinRightIdle, PenguinRightMove, PenguinRightFire],
    ],
];

/// Serializable view of one catalog entry, used by `--dump-sequences`.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceInfo {
    pub name: &'static str,
    pub frames: &'static [ShapeIndex],
    pub loop_span: usize,
}

/// Describe the whole catalog in declaration order.
pub fn catalog() -> Vec<SequenceInfo> {
    AnimationId::ALL
        .iter()
        .map(|id| {
            let seq = id.sequence();
            SequenceInfo {
                name: id.name(),
                frames: seq.frames(),
                loop_span: seq.loop_span(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::sprites::SHAPE_COUNT;

    #[test]
    fn test_every_pose_of_every_actor_resolves() {
        for model in ActorModel::ALL {
            for direction in Direction::ALL {
                for action in Action::ALL {
                    let seq = model.sequence(direction, action);
                    assert!(seq.len() >= 1, "{model:?} {direction:?} {action:?}");
                    assert!(seq.loop_span() >= 1);
                }
            }
        }
    }

    #[test]
    fn test_all_shapes_in_atlas_range() {
        for id in AnimationId::ALL {
            for shape in id.sequence().frames() {
                assert!((*shape as usize) < SHAPE_COUNT, "{} uses {}", id.name(), shape);
            }
        }
    }

    #[test]
    fn test_unsupported_pose_aliases_na_slot() {
        assert_eq!(
            ActorModel::Bee.sequence_id(Direction::Left, Action::Fire),
            AnimationId::BeeLeftNa
        );
        assert_eq!(
            ActorModel::Worm.sequence_id(Direction::Up, Action::Idle),
            AnimationId::WormNa
        );
        assert_eq!(
            ActorModel::Ghost.sequence_id(Direction::Right, Action::Idle),
            AnimationId::GhostRightMove
        );
    }

    #[test]
    fn test_canonical_actor_lookup() {
        let seq = ActorModel::Cuby.sequence(Direction::Down, Action::Move);
        assert_eq!(seq.frames(), &[1, 2, 1, 0]);
        assert_eq!(seq.loop_span(), 4);
        let fire = ActorModel::Ghost.sequence(Direction::Down, Action::Fire);
        assert_eq!(fire.frames(), &[80, 81, 82]);
        assert!(fire.holds_last_frame());
    }

    #[test]
    fn test_bubble_shoot_loops_last_four() {
        let seq = AnimationId::BubbleShoot.sequence();
        assert_eq!(seq.len(), 9);
        assert_eq!(seq.loop_span(), 4);
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = AnimationId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AnimationId::ALL.len());
    }

    #[test]
    fn test_catalog_serializes() {
        let json = serde_json::to_string(&catalog()).expect("serialize catalog");
        assert!(json.contains("\"name\":\"CUBY_DOWN_MOVE\""));
        assert!(json.contains("\"loop_span\":4"));
    }
}
