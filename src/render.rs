//! Server-side HTML for the single game page.
//!
//! The page is plain form-posting HTML; every value interpolated below is
//! server-controlled (topic names come from the closed catalog, letters are
//! validated A-Z before they reach a message), so no escaping layer is
//! needed.

use crate::games::hangman::{RoundOutcome, RoundView};

/// Renders the full game page for one round.
pub fn page(view: &RoundView) -> String {
    let topic_options: String = view
        .topics
        .iter()
        .map(|topic| {
            let selected = if *topic == view.current_topic {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{}\"{}>{}</option>",
                topic, selected, topic
            )
        })
        .collect();

    let guessed = if view.guessed_letters.is_empty() {
        "None".to_string()
    } else {
        view.guessed_letters
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let message_class = match view.outcome {
        RoundOutcome::Won => "win",
        RoundOutcome::Lost => "loss",
        RoundOutcome::InProgress => "",
    };

    let action = if view.game_over {
        format!(
            "<a href=\"/restart\">Play Again (Topic: {})</a>",
            view.current_topic
        )
    } else {
        concat!(
            "<form method=\"POST\" action=\"/\">\n",
            "    <label for=\"letter\">Guess a letter:</label>\n",
            "    <input type=\"text\" id=\"letter\" name=\"letter\" maxlength=\"1\" required autofocus>\n",
            "    <button type=\"submit\">Guess</button>\n",
            "</form>"
        )
        .to_string()
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Gallows</title>
    <style>
        body {{ font-family: sans-serif; text-align: center; background-color: #f4f4f4; color: #333; }}
        .container {{ max-width: 600px; margin: 50px auto; background: #fff; padding: 20px; border-radius: 8px; box-shadow: 0 0 10px rgba(0, 0, 0, 0.1); }}
        h1 {{ color: #2c3e50; }}
        h2 {{ font-size: 2.5em; letter-spacing: 5px; margin: 20px 0; color: #e74c3c; }}
        pre {{ background: #333; color: #00ff00; padding: 10px; border-radius: 4px; overflow: auto; display: inline-block; text-align: left; font-size: 1.1em; }}
        #message {{ margin-top: 20px; font-weight: bold; min-height: 20px; }}
        .win {{ color: green; }}
        .loss {{ color: red; }}
        form {{ margin-top: 20px; }}
        input[type="text"], select {{ padding: 10px; font-size: 1.2em; border: 1px solid #ccc; border-radius: 4px; margin-right: 10px; }}
        input[type="text"] {{ width: 60px; text-align: center; }}
        button, a {{ background-color: #3498db; color: white; padding: 10px 15px; border: none; border-radius: 4px; cursor: pointer; text-decoration: none; font-size: 1em; }}
        button:hover, a:hover {{ background-color: #2980b9; }}
        #topic-selector {{ margin-bottom: 20px; padding: 10px; border: 1px dashed #ccc; border-radius: 5px; }}
        #topic-selector button {{ margin-left: 10px; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>Gallows</h1>

        <div id="topic-selector">
            <form method="POST" action="/">
                <label for="topic">Choose a topic:</label>
                <select name="topic" id="topic">
                    {topic_options}
                </select>
                <button type="submit">Start New Game</button>
            </form>
        </div>

        <pre>{art}</pre>

        <p id="lives">Lives remaining: {lives}/{max_lives}</p>
        <p id="guessed">Guessed letters: {guessed}</p>

        <h2>{masked_word}</h2>

        <p id="message" class="{message_class}">{message}</p>

        {action}
    </div>
</body>
</html>
"#,
        topic_options = topic_options,
        art = view.art,
        lives = view.lives,
        max_lives = view.max_lives,
        guessed = guessed,
        masked_word = view.masked_word,
        message_class = message_class,
        message = view.message,
        action = action,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::{Round, Topic};

    #[test]
    fn test_page_shows_round_state() {
        let mut round = Round::with_secret(Topic::Animals, "ZEBRA");
        round.apply_guess("Z");
        let html = page(&RoundView::of(&round));

        assert!(html.contains("Z _ _ _ _"));
        assert!(html.contains("Lives remaining: 6/6"));
        assert!(html.contains("Guessed letters: Z"));
        assert!(html.contains("name=\"letter\""));
        assert!(html.contains("<option value=\"Animals\" selected>"));
    }

    #[test]
    fn test_game_over_page_offers_restart_instead_of_guessing() {
        let mut round = Round::with_secret(Topic::Sports, "GOLFER");
        for letter in ["Q", "X", "W", "V", "J", "K"] {
            round.apply_guess(letter);
        }
        let html = page(&RoundView::of(&round));

        assert!(html.contains("GAME OVER"));
        assert!(html.contains("href=\"/restart\""));
        assert!(!html.contains("name=\"letter\""));
    }
}
