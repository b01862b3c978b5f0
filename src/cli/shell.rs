use std::io::{self, BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use sofreh_kitchen::SuggestMode;
use tracing::debug;

use crate::cli::{print_dish, resolve_rng};
use crate::config::Config;
use crate::session::Session;

/// Interactive line-driven session over stdin/stdout.
///
/// One [`Session`] lives for the whole shell run; quitting discards it.
#[tracing::instrument(skip(config))]
pub fn run(config: &Config, seed: Option<u64>) -> Result<()> {
    let mut rng = resolve_rng(config, seed);
    let mut session = Session::seeded();
    session.observe(|event| debug!(?event, "session event"));

    println!("سفره - type 'help' for commands");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "dishes" => dishes(&session),
            "show" => show(&session, rest),
            "add" => add(&mut session, rest),
            "family" => family(&session),
            "select" => select(&mut session, rest),
            "suggest" => suggest(&mut session, &mut rng, rest),
            "like" => like(&mut session, rest),
            "accept" => accept(&mut session),
            "shopping" => shopping(&session),
            "share" => share(&session),
            _ => println!("unknown command '{command}'; type 'help'"),
        }
    }

    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  dishes                      list the catalog");
    println!("  show <dish>                 full card for one dish");
    println!("  add <name> [allergies]      add a family member (allergies comma-separated)");
    println!("  family                      list family members");
    println!("  select <n|none>             pick the member suggestions are for");
    println!("  suggest [random|favorites]  draw a dish");
    println!("  like [dish]                 toggle a favorite (default: current suggestion)");
    println!("  accept                      put the suggestion's ingredients on the shopping list");
    println!("  shopping                    show the shopping list");
    println!("  share                       print the list as shareable text");
    println!("  quit                        leave");
}

fn dishes(session: &Session) {
    for (index, dish) in session.catalog().all().iter().enumerate() {
        println!("{}. {}", index + 1, dish.name);
    }
}

fn show(session: &Session, name: &str) {
    if name.is_empty() {
        println!("usage: show <dish>");
        return;
    }
    match session.catalog().find(name) {
        Some(dish) => print_dish(dish),
        None => println!("no dish named '{name}'"),
    }
}

fn add(session: &mut Session, rest: &str) {
    let (name, allergies) = match rest.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (rest, ""),
    };
    match session.add_person(name, allergies) {
        Ok(_) => println!("added {name}"),
        Err(err) => println!("{err}"),
    }
}

fn family(session: &Session) {
    if session.roster().is_empty() {
        println!("(nobody yet; use 'add')");
        return;
    }
    let selected = session.selected_person().map(|p| p.id().clone());
    for (index, person) in session.roster().list_all().iter().enumerate() {
        let marker = if Some(person.id()) == selected.as_ref() {
            "*"
        } else {
            " "
        };
        println!("{marker}{}. {}", index + 1, person.name());
        if !person.allergies().is_empty() {
            let allergies: Vec<&str> = person.allergies().iter().map(String::as_str).collect();
            println!("    allergies: {}", allergies.join("، "));
        }
        if !person.likes().is_empty() {
            let likes: Vec<&str> = person.likes().iter().map(String::as_str).collect();
            println!("    likes: {}", likes.join("، "));
        }
    }
}

fn select(session: &mut Session, rest: &str) {
    if rest == "none" {
        match session.select_person(None) {
            Ok(()) => println!("selection cleared"),
            Err(err) => println!("{err}"),
        }
        return;
    }

    let index: usize = match rest.parse() {
        Ok(n) => n,
        Err(_) => {
            println!("usage: select <n|none> (see 'family' for numbers)");
            return;
        }
    };

    let found = index
        .checked_sub(1)
        .and_then(|i| session.roster().list_all().get(i))
        .map(|p| (p.id().clone(), p.name().to_string()));
    match found {
        Some((id, name)) => match session.select_person(Some(id)) {
            Ok(()) => println!("selected {name}"),
            Err(err) => println!("{err}"),
        },
        None => println!("no member number {index}; see 'family'"),
    }
}

fn suggest(session: &mut Session, rng: &mut StdRng, rest: &str) {
    let mode = if rest.is_empty() {
        SuggestMode::Random
    } else {
        match rest.parse::<SuggestMode>() {
            Ok(mode) => mode,
            Err(_) => {
                println!("usage: suggest [random|favorites]");
                return;
            }
        }
    };

    let result = match mode {
        SuggestMode::Random => session.suggest_random(rng),
        SuggestMode::Favorites => {
            if !session.favorite_lottery_available() {
                println!(
                    "favorites lottery unavailable: select a member with at least one liked dish"
                );
                return;
            }
            session.suggest_favorite(rng)
        }
    };

    match result {
        Ok(dish) => print_dish(dish),
        Err(err) => println!("{err}"),
    }
}

fn like(session: &mut Session, rest: &str) {
    let dish_name = if rest.is_empty() {
        match session.suggestion() {
            Some(dish) => dish.name.clone(),
            None => {
                println!("nothing suggested yet; use 'like <dish>'");
                return;
            }
        }
    } else {
        rest.to_string()
    };

    // Likes are free-form names; just point out the ones the catalog
    // does not know.
    if session.catalog().find(&dish_name).is_none() {
        println!("note: '{dish_name}' is not a catalog dish");
    }

    match session.toggle_like(&dish_name) {
        Ok(true) => println!("liked {dish_name}"),
        Ok(false) => println!("unliked {dish_name}"),
        Err(err) => println!("{err}"),
    }
}

fn accept(session: &mut Session) {
    match session.accept_suggestion() {
        Ok(()) => println!("shopping list now has {} items", session.shopping_list().len()),
        Err(err) => println!("{err}"),
    }
}

fn shopping(session: &Session) {
    let list = session.shopping_list();
    if list.is_empty() {
        println!("(empty)");
        return;
    }
    for (index, item) in list.items().iter().enumerate() {
        println!("{}. {}", index + 1, item);
    }
}

fn share(session: &Session) {
    let text = session.share_text();
    if text.is_empty() {
        println!("(empty)");
    } else {
        println!("{text}");
    }
}
