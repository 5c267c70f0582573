//! Plain-text diff and sync reports.
//!
//! ```text
//! (===)       1   Death parade
//! ( < )       5   Shirobako
//!         |-> LastUpdated: got .., want ..
//! (---)       2   Ore monogatari
//! (<<<)       3   Shingeki no Kyojin
//!         |-> EpisodesWatched: got 5, want 10
//! ```

use std::io::{self, Write};

use anisync::shared::compare::{AniDiff, Diff};
use anisync::shared::sync::SyncResult;

pub fn write_diff(out: &mut impl Write, diff: &Diff, mal_username: &str) -> io::Result<()> {
    for a in &diff.up_to_date {
        writeln!(out, "(===) {:>7} \t{}", a.id, a.title)?;
    }
    for d in &diff.uncertain {
        writeln!(out, "( < ) {:>7} \t{}", d.anime.id, d.anime.title)?;
        write_changes(out, d)?;
    }
    for a in &diff.missing {
        writeln!(out, "(---) {:>7} \t{}", a.id, a.title)?;
    }
    for d in &diff.need_update {
        writeln!(out, "(<<<) {:>7} \t{}", d.anime.id, d.anime.title)?;
        write_changes(out, d)?;
    }

    writeln!(out)?;
    writeln!(out, "Kitsu entries: {}", diff.right.len())?;
    writeln!(out, "MyAnimeList entries: {}", diff.left.len())?;
    writeln!(out, "(===) Up to date: {}", diff.up_to_date.len())?;
    writeln!(out, "( < ) Okay: {}", diff.uncertain.len())?;
    writeln!(out, "(---) Missing: {}", diff.missing.len())?;
    writeln!(out, "(<<<) Need update: {}", diff.need_update.len())?;
    writeln!(out, "After this operation, there will be:")?;
    writeln!(
        out,
        "{} updated and {} newly added anime on MyAnimeList account {:?}.",
        diff.need_update.len(),
        diff.missing.len(),
        mal_username
    )
}

fn write_changes(out: &mut impl Write, d: &AniDiff) -> io::Result<()> {
    for change in d.changes() {
        writeln!(out, "\t\t|-> {}", change)?;
    }
    Ok(())
}

pub fn write_sync(out: &mut impl Write, result: &SyncResult) -> io::Result<()> {
    writeln!(out, "{} updated, {} newly added.", result.updates.len(), result.adds.len())?;
    if !result.update_fails.is_empty() {
        writeln!(out, "{} failed to be updated.", result.update_fails.len())?;
        for (i, fail) in result.update_fails.iter().enumerate() {
            writeln!(
                out,
                "#{} failed to update ({} {}): {}",
                i + 1,
                fail.anime.id,
                fail.anime.title,
                fail.error
            )?;
        }
    }
    if !result.add_fails.is_empty() {
        writeln!(out, "{} failed to be added.", result.add_fails.len())?;
        for (i, fail) in result.add_fails.iter().enumerate() {
            writeln!(
                out,
                "#{} failed to add ({} {}): {}",
                i + 1,
                fail.anime.id,
                fail.anime.title,
                fail.error
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anisync::shared::compare::FieldDiff;
    use anisync::shared::sync::Fail;
    use anisync::shared::Anime;
    use pretty_assertions::assert_eq;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_diff_report() {
        let diff = Diff {
            left: vec![Anime::new(1, "Death parade"), Anime::new(3, "Shingeki no Kyojin")],
            right: vec![
                Anime::new(1, "Death parade"),
                Anime::new(2, "Ore monogatari"),
                Anime::new(3, "Shingeki no Kyojin"),
            ],
            up_to_date: vec![Anime::new(1, "Death parade")],
            missing: vec![Anime::new(2, "Ore monogatari")],
            need_update: vec![AniDiff {
                anime: Anime::new(3, "Shingeki no Kyojin"),
                episodes_watched: Some(FieldDiff::new(5, 10)),
                ..Default::default()
            }],
            ..Default::default()
        };

        let text = render(|out| write_diff(out, &diff, "AnimeFan"));

        assert_eq!(
            text,
            "(===)       1 \tDeath parade\n\
             (---)       2 \tOre monogatari\n\
             (<<<)       3 \tShingeki no Kyojin\n\
             \t\t|-> EpisodesWatched: got 5, want 10\n\
             \n\
             Kitsu entries: 3\n\
             MyAnimeList entries: 2\n\
             (===) Up to date: 1\n\
             ( < ) Okay: 0\n\
             (---) Missing: 1\n\
             (<<<) Need update: 1\n\
             After this operation, there will be:\n\
             1 updated and 1 newly added anime on MyAnimeList account \"AnimeFan\".\n"
        );
    }

    #[test]
    fn test_sync_report() {
        let result = SyncResult {
            adds: vec![Anime::new(1, "Death parade")],
            update_fails: vec![Fail::new(Anime::new(4, "Kuroko no basuke"), "misdirection overflow")],
            ..Default::default()
        };

        let text = render(|out| write_sync(out, &result));

        assert_eq!(
            text,
            "0 updated, 1 newly added.\n\
             1 failed to be updated.\n\
             #1 failed to update (4 Kuroko no basuke): misdirection overflow\n"
        );
    }
}
