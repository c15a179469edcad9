use core::fmt;
use std::fmt::Write as _;

use crate::domain::door::Door;
use crate::engine::game::{FirstChoiceSet, Game, HostChoiceSet, ResolvedGame, TrialPhase};

/// Текстовая "доска" из четырёх строк:
/// номера дверей, призы, отметки игрока (F – первый выбор,
/// D – окончательный), отметка ведущего (H).
pub fn render_board(doors: &[Door]) -> String {
    let mut out = String::new();

    for (i, _) in doors.iter().enumerate() {
        let _ = write!(out, "|  DOOR {}  |", i + 1);
    }
    out.push('\n');

    for door in doors {
        let _ = write!(out, "|   {}   |", door.prize);
    }
    out.push('\n');

    for door in doors {
        let cell = match (door.is_first_choice, door.is_final_choice) {
            (true, true) => "|Player F D|",
            (true, false) => "|Player F  |",
            (false, true) => "|Player   D|",
            (false, false) => "|Player    |",
        };
        out.push_str(cell);
    }
    out.push('\n');

    for door in doors {
        out.push_str(if door.is_host_choice {
            "|Host    H |"
        } else {
            "|Host      |"
        });
    }
    out.push('\n');

    out
}

macro_rules! impl_board_display {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&render_board(&self.doors()))
                }
            }
        )*
    };
}

impl_board_display!(Game, FirstChoiceSet, HostChoiceSet, ResolvedGame, TrialPhase);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::actions::PlayerAction;

    #[test]
    fn board_marks_first_final_and_host() {
        let resolved = Game::with_car_at(3, 0)
            .unwrap()
            .set_first_choice(1)
            .unwrap()
            .set_host_choice(2)
            .unwrap()
            .resolve(PlayerAction::Switch)
            .unwrap();

        let board = render_board(&resolved.doors());
        let lines: Vec<&str> = board.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "|  DOOR 1  ||  DOOR 2  ||  DOOR 3  |");
        assert_eq!(lines[1], "|   CAR!   ||   Goat   ||   Goat   |");
        assert_eq!(lines[2], "|Player   D||Player F  ||Player    |");
        assert_eq!(lines[3], "|Host      ||Host      ||Host    H |");
    }
}
