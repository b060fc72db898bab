use chrono::{FixedOffset, TimeZone};
use git2::{ErrorCode, Repository, Status, StatusOptions};

use crate::error::Result;
use crate::model::{COMMIT_DATE_FORMAT, CommitEntry, RenamedPath, RepoStatus};

pub fn get_status(repo: &Repository) -> Result<RepoStatus> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .renames_head_to_index(true);

    let mut status = RepoStatus {
        current: current_branch(repo),
        ..RepoStatus::default()
    };

    for entry in repo.statuses(Some(&mut opts))?.iter() {
        let Some(path) = entry.path().map(str::to_string) else {
            continue;
        };
        let flags = entry.status();

        if flags.is_conflicted() {
            status.conflicted.push(path);
            continue;
        }
        if flags.is_wt_new() {
            status.not_added.push(path);
            continue;
        }

        if flags.intersects(Status::INDEX_MODIFIED | Status::WT_MODIFIED) {
            status.modified.push(path.clone());
        }
        if flags.is_index_new() {
            status.created.push(path.clone());
        }
        if flags.intersects(Status::INDEX_DELETED | Status::WT_DELETED) {
            status.deleted.push(path.clone());
        }
        if flags.is_index_renamed()
            && let Some(delta) = entry.head_to_index()
            && let (Some(from), Some(to)) = (delta.old_file().path(), delta.new_file().path())
        {
            status.renamed.push(RenamedPath {
                from: from.to_string_lossy().into_owned(),
                to: to.to_string_lossy().into_owned(),
            });
        }
        if flags.intersects(
            Status::INDEX_NEW
                | Status::INDEX_MODIFIED
                | Status::INDEX_DELETED
                | Status::INDEX_RENAMED
                | Status::INDEX_TYPECHANGE,
        ) {
            status.staged.push(path);
        }
    }

    Ok(status)
}

pub(crate) fn current_branch(repo: &Repository) -> Option<String> {
    match repo.head() {
        Ok(head) if head.is_branch() => head.shorthand().map(str::to_string),
        Ok(_) => None,
        // Unborn branch: HEAD names a ref that has no commit yet
        Err(e) if e.code() == ErrorCode::UnbornBranch => repo
            .find_reference("HEAD")
            .ok()
            .and_then(|r| r.symbolic_target().map(str::to_string))
            .map(|target| target.trim_start_matches("refs/heads/").to_string()),
        Err(_) => None,
    }
}

/// Walk history from HEAD, newest first. A repository without commits has no history.
pub fn get_log(repo: &Repository, max_count: usize) -> Result<Vec<CommitEntry>> {
    match repo.head() {
        Ok(_) => {}
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    }

    let mut revwalk = repo.revwalk()?;
    revwalk.push_head()?;

    let mut commits = Vec::new();
    for oid in revwalk.take(max_count) {
        let oid = oid?;
        let commit = repo.find_commit(oid)?;
        let author = commit.author();

        commits.push(CommitEntry {
            hash: oid.to_string(),
            date: format_commit_time(commit.time()),
            message: commit.summary().unwrap_or_default().to_string(),
            author_name: author.name().unwrap_or("Unknown").to_string(),
            author_email: author.email().unwrap_or_default().to_string(),
        });
    }

    Ok(commits)
}

fn format_commit_time(time: git2::Time) -> String {
    FixedOffset::east_opt(time.offset_minutes() * 60)
        .and_then(|offset| offset.timestamp_opt(time.seconds(), 0).single())
        .map(|date| date.format(COMMIT_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
