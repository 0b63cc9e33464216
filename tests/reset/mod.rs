mod reset_guards_untracked_files;
mod reset_unknown_commit_reports_error;
