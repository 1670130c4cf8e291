// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Guided walkthrough of the prompt layer.

use std::io::{BufRead, Write};
use typeline::{Prompt, Result};

/// Everything the user answered.
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    pub name: String,
    pub number: i32,
    pub knew: bool,
    pub thoughts: String,
}

impl Answers {
    /// Closing summary.
    pub fn summary(&self) -> String {
        format!(
            "-----\n\
             Your answers\n\
             Name: {}\n\
             Number: {}\n\
             Already Knew?: {}\n\
             Thoughts: \n{}\
             -----\n\
             Thank you for checking this out!",
            self.name,
            self.number,
            if self.knew { "yes" } else { "no" },
            self.thoughts,
        )
    }
}

/// Run the walkthrough on `prompt`.
pub fn run<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Answers> {
    let name = prompt.prompt_string("Hello, what is your name?")?;
    writeln!(prompt.writer_mut(), "{} is a nice name!", name)?;

    let number =
        prompt.prompt_integer_range("What is your favorite number between 1 and 10?", 1, 10)?;

    let knew = prompt.prompt_boolean(&format!(
        "Did you know that {}x2 is {}?",
        number,
        number * 2
    ))?;
    if knew {
        writeln!(prompt.writer_mut(), "I figured. You seem pretty smart")?;
    } else {
        writeln!(prompt.writer_mut(), "You learn something new every day!")?;
    }

    let thoughts = prompt.prompt_multi_line_string("What did you think of this example program?")?;

    let answers = Answers {
        name,
        number,
        knew,
        thoughts,
    };
    writeln!(prompt.writer_mut(), "{}", answers.summary())?;
    tracing::info!(number = answers.number, knew = answers.knew, "walkthrough finished");

    Ok(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeline::{Error, PromptConfig};

    fn scripted(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::with_config(input.as_bytes(), Vec::new(), PromptConfig::scripted(5))
    }

    #[test]
    fn test_walkthrough() {
        let mut prompt = scripted("Ada\n0\n3\nno\nNeat.\n.\n");
        let answers = run(&mut prompt).unwrap();
        assert_eq!(
            answers,
            Answers {
                name: "Ada".to_string(),
                number: 3,
                knew: false,
                thoughts: "Neat.\n".to_string(),
            }
        );

        let out = String::from_utf8(prompt.into_inner().1).unwrap();
        assert!(out.contains("Ada is a nice name!"));
        assert!(out.contains("Did you know that 3x2 is 6?"));
        assert!(out.contains("You learn something new every day!"));
        assert!(out.contains("Already Knew?: no"));
        assert!(out.ends_with("Thank you for checking this out!\n"));
    }

    #[test]
    fn test_walkthrough_knew() {
        let mut prompt = scripted("Bo\n10\ntrue\n");
        let answers = run(&mut prompt).unwrap();
        assert!(answers.knew);
        assert_eq!(answers.thoughts, "");

        let out = String::from_utf8(prompt.into_inner().1).unwrap();
        assert!(out.contains("I figured. You seem pretty smart"));
        assert!(out.contains("Already Knew?: yes"));
    }

    #[test]
    fn test_walkthrough_stops_at_end_of_input() {
        let mut prompt = scripted("Cy\n");
        assert!(matches!(run(&mut prompt), Err(Error::EndOfInput)));
    }
}
