use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use vidz::api::VidzApi;
use vidz::commands::{CmdMessage, CmdResult, MessageLevel};
use vidz::config::VidzConfig;
use vidz::error::Result;
use vidz::library::Library;

mod args;
mod repl;

use args::Cli;
use repl::ReplCommand;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.plain {
        colored::control::set_override(false);
    }

    let config_dir = config_dir();
    let mut config = VidzConfig::load(&config_dir).unwrap_or_default();
    if cli.save_catalog {
        config.catalog = cli.catalog.clone();
        config.save(&config_dir)?;
    }

    let library = match cli.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => Library::from_file(path)?,
        None => Library::builtin(),
    };

    let mut api = VidzApi::new(library);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(line) = lines.next() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match repl::parse_line(&line) {
            Some(ReplCommand::Exit) => break,
            Some(ReplCommand::Help) => println!("{}", repl::help_text()),
            Some(command) => dispatch(&mut api, command, &mut lines)?,
            None => println!("{}", "Please enter a valid command".red()),
        }
    }
    Ok(())
}

fn dispatch<L>(api: &mut VidzApi, command: ReplCommand, lines: &mut L) -> Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    let result = match command {
        ReplCommand::NumberOfVideos => api.number_of_videos(),
        ReplCommand::ShowAllVideos => api.show_all_videos(),
        ReplCommand::Play(id) => api.play_video(&id),
        ReplCommand::Stop => api.stop_video(),
        ReplCommand::PlayRandom => api.play_random_video(),
        ReplCommand::Pause => api.pause_video(),
        ReplCommand::Continue => api.continue_video(),
        ReplCommand::ShowPlaying => api.show_playing(),
        ReplCommand::CreatePlaylist(name) => api.create_playlist(&name),
        ReplCommand::AddToPlaylist(name, id) => api.add_to_playlist(&name, &id),
        ReplCommand::ShowAllPlaylists => api.show_all_playlists(),
        ReplCommand::ShowPlaylist(name) => api.show_playlist(&name),
        ReplCommand::RemoveFromPlaylist(name, id) => api.remove_from_playlist(&name, &id),
        ReplCommand::ClearPlaylist(name) => api.clear_playlist(&name),
        ReplCommand::DeletePlaylist(name) => api.delete_playlist(&name),
        ReplCommand::SearchVideos(term) => {
            let result = api.search_videos(&term);
            print_messages(&result.messages);
            return prompt_selection(api, &result, lines);
        }
        ReplCommand::SearchVideosWithTag(tag) => {
            let result = api.search_videos_with_tag(&tag);
            print_messages(&result.messages);
            return prompt_selection(api, &result, lines);
        }
        ReplCommand::FlagVideo(id, reason) => api.flag_video(&id, reason.as_deref()),
        ReplCommand::AllowVideo(id) => api.allow_video(&id),
        // Handled by the shell loop before dispatch.
        ReplCommand::Help | ReplCommand::Exit => return Ok(()),
    };
    print_messages(&result.messages);
    Ok(())
}

/// Reads the one-line answer to the search prompt and plays the selected
/// result, if any. Only runs when there were results to select from.
fn prompt_selection<L>(api: &mut VidzApi, result: &CmdResult, lines: &mut L) -> Result<()>
where
    L: Iterator<Item = io::Result<String>>,
{
    if result.listed_videos.is_empty() {
        return Ok(());
    }
    let answer = match lines.next() {
        Some(line) => line?,
        None => return Ok(()),
    };
    if let Some(played) = api.select_search_result(&result.listed_videos, &answer) {
        print_messages(&played.messages);
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("VIDZ_HOME") {
        return PathBuf::from(dir);
    }
    ProjectDirs::from("com", "vidz", "vidz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
