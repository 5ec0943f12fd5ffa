#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use hotseat_battleship::{Console, Game, GamePhase, ShipKind};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    const FLEET_LINES: [&str; 5] = ["A1 A5", "C1 C4", "E1 E3", "G1 G3", "I1 I2"];
    const FLEET_TARGETS: [&str; 17] = [
        "A1", "A2", "A3", "A4", "A5", "C1", "C2", "C3", "C4", "E1", "E2", "E3", "G1", "G2",
        "G3", "I1", "I2",
    ];

    fn play(script: &str, seed: u64) -> (Game, anyhow::Result<()>, String) {
        let mut game = Game::new("Player 1", "Player 2");
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let result = console.run(&mut game, &mut rng);
        let output = String::from_utf8(console.into_output()).unwrap();
        (game, result, output)
    }

    fn placement_script() -> String {
        let mut script = String::new();
        for line in FLEET_LINES {
            script.push_str(line);
            script.push('\n');
        }
        script.push('\n');
        for line in FLEET_LINES {
            script.push_str(line);
            script.push('\n');
        }
        script
    }

    #[test]
    fn test_full_game_from_scripted_input() {
        let mut script = placement_script();
        for (i, target) in FLEET_TARGETS.iter().enumerate() {
            script.push('\n');
            script.push_str(target);
            script.push('\n');
            if i + 1 < FLEET_TARGETS.len() {
                script.push_str("\nJ10\n");
            }
        }

        let (game, result, output) = play(&script, 1);
        result.unwrap();
        assert_eq!(game.phase(), GamePhase::Finished { winner: 0 });
        assert!(output.contains("Player 1, place your ships on the game field"));
        assert!(output.contains("Player 2, place your ships on the game field"));
        assert!(output.contains("Enter the coordinates of the Aircraft Carrier (5 cells):"));
        assert!(output.contains("Enter the coordinates of the Destroyer (2 cells):"));
        assert!(output.contains("Player 1, it's your turn:"));
        assert!(output.contains("Player 2, it's your turn:"));
        assert!(output.contains("---------------------"));
        assert_eq!(output.matches("You sank a ship!").count(), 4);
        assert_eq!(output.matches("You missed!").count(), 16);
        assert!(output.contains("You sank the last ship. You won. Congratulations!"));
    }

    #[test]
    fn test_errors_are_reported_and_retried() {
        let mut script = String::new();
        script.push_str("A1 B2\n");
        script.push_str("A1 A4\n");
        script.push_str("A1\n");
        script.push_str("A1 A5\n");
        script.push_str("B1 B4\n");
        let (game, result, output) = play(&script, 1);

        // script runs dry during placement
        assert!(result.is_err());
        assert!(output.contains("Error! Wrong ship location! Try again:"));
        assert!(output.contains("Error! Wrong length of the Aircraft Carrier! Try again:"));
        assert!(output.contains("Error! You entered the wrong coordinates! Try again:"));
        assert!(output.contains("Error! You placed it too close to another one! Try again:"));
        assert_eq!(
            game.phase(),
            GamePhase::Placement { player: 0, ship: ShipKind::Battleship }
        );
    }

    #[test]
    fn test_bad_shot_is_retried() {
        let mut script = placement_script();
        script.push_str("\nK1\nA0\nb1\n");
        let (game, result, output) = play(&script, 1);
        assert!(result.is_err());
        assert_eq!(output.matches("Error! You entered the wrong coordinates!").count(), 2);
        assert!(output.contains("You missed!"));
        assert_eq!(game.phase(), GamePhase::Combat { attacker: 1 });
    }

    #[test]
    fn test_empty_line_places_ship_at_random() {
        let script = "\n\n\n\n\n";
        let (game, result, output) = play(script, 99);
        assert!(result.is_err());
        assert!(game.battlefield(0).fleet_placed());
        assert!(output.contains("Aircraft Carrier placed at"));
        assert!(output.contains("Destroyer placed at"));
    }
}
