use std::path::PathBuf;

use log::info;

use moniker_core::model::composer::{Composer, WordListSource, generator};
use moniker_core::model::options::{ComposerOptions, WordListOptions};
use moniker_core::{Error, WordList, adjective, choose_name, noun, verb};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows word list loading and compositions
    env_logger::init();

    // Default generator: "Adjective-Noun", built once for the whole process
    println!("Random name: {}", choose_name(None)?);
    println!("Seeded name: {}", choose_name(Some("alice"))?);

    // Same seed, same name
    assert_eq!(choose_name(Some("alice"))?, choose_name(Some("alice"))?);

    // Keep only short words and join with a custom glue
    let options = ComposerOptions {
        glue: " ".to_owned(),
        word_list: WordListOptions { max_length: Some(5), ..WordListOptions::default() },
    };

    // Sources can be built lists, text files or factories
    let sources = vec![
        WordListSource::factory(adjective),
        WordListSource::factory(noun),
        WordListSource::factory(verb),
    ];
    let composer = generator(sources, &options)?;

    // Generate 10 names from seeds "user-1" .. "user-10"
    for i in 1..=10 {
        let seed = format!("user-{i}");
        println!("{seed}: {}", composer.choose(Some(&seed))?);
    }

    // Loading a missing file reports the path
    let mut broken = Composer::default();
    let missing = PathBuf::from("./dict/missing.txt");
    match broken.add_word_list(missing, &WordListOptions::default()) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Two identical one-word categories cannot produce distinct words
    let clash = Composer::default()
        .with_word_list(WordList::from_text("left", "falcon", &WordListOptions::default()))
        .with_word_list(WordList::from_text("right", "falcon", &WordListOptions::default()));
    match clash.choose(Some("alice")) {
        Err(Error::TooManyTries { tries }) => println!("Gave up after {tries} tries"),
        other => println!("Should not happen: {other:?}"),
    }

    info!("done");
    Ok(())
}
