//! Tests for pending selection bookkeeping.

use super::{due, task, wednesday_utc};
use crate::{
    conversation::{
        domain::{ConversationId, InvalidChoice, SelectionAction},
        services::Disambiguator,
    },
    task::domain::{Task, TaskId},
};
use chrono::TimeDelta;
use rstest::{fixture, rstest};

#[fixture]
fn candidates() -> Vec<Task> {
    vec![task("Math homework", due(10, 22)), task("Math project", due(10, 30))]
}

#[fixture]
fn conversation() -> ConversationId {
    ConversationId::new("chat-1")
}

fn disambiguator() -> Disambiguator {
    Disambiguator::new(TimeDelta::minutes(10))
}

#[rstest]
fn current_question_survives_reads(candidates: Vec<Task>, conversation: ConversationId) {
    let pending = disambiguator();
    let second = candidates.get(1).cloned().expect("fixture task");
    pending.begin(&conversation, SelectionAction::Complete, candidates, wednesday_utc());

    let question = pending
        .current(&conversation, wednesday_utc())
        .expect("question open");
    assert_eq!(question.choose(2), Ok(&second));
    assert_eq!(question.action(), SelectionAction::Complete);
    assert!(pending.has_pending(&conversation, wednesday_utc()));
}

#[rstest]
#[case(0)]
#[case(3)]
fn out_of_range_choice_is_rejected(
    candidates: Vec<Task>,
    conversation: ConversationId,
    #[case] choice: usize,
) {
    let pending = disambiguator();
    pending.begin(&conversation, SelectionAction::Delete, candidates, wednesday_utc());
    let question = pending
        .current(&conversation, wednesday_utc())
        .expect("question open");

    assert_eq!(
        question.choose(choice),
        Err(InvalidChoice {
            choice,
            available: 2
        })
    );
    assert!(pending.has_pending(&conversation, wednesday_utc()));
}

#[rstest]
fn nothing_is_current_without_a_question(conversation: ConversationId) {
    assert_eq!(
        disambiguator().current(&conversation, wednesday_utc()),
        None
    );
}

#[rstest]
fn expired_questions_are_dropped_on_read(candidates: Vec<Task>, conversation: ConversationId) {
    let pending = disambiguator();
    pending.begin(&conversation, SelectionAction::Complete, candidates, wednesday_utc());
    let later = wednesday_utc() + TimeDelta::minutes(11);

    assert!(!pending.has_pending(&conversation, later));
    assert_eq!(pending.pending(&conversation), None);
}

#[rstest]
fn begin_replaces_the_previous_question(candidates: Vec<Task>, conversation: ConversationId) {
    let pending = disambiguator();
    pending.begin(&conversation, SelectionAction::Complete, candidates, wednesday_utc());
    let replacement = vec![task("Essay", due(10, 24)), task("Essay notes", due(10, 25))];
    pending.begin(
        &conversation,
        SelectionAction::Delete,
        replacement.clone(),
        wednesday_utc(),
    );

    let current = pending.pending(&conversation).expect("question recorded");
    assert_eq!(current.action(), SelectionAction::Delete);
    assert_eq!(current.candidates(), replacement.as_slice());
}

#[rstest]
fn questions_are_kept_per_conversation(candidates: Vec<Task>, conversation: ConversationId) {
    let pending = disambiguator();
    let other = ConversationId::new("chat-2");
    pending.begin(&conversation, SelectionAction::Complete, candidates, wednesday_utc());

    assert!(pending.has_pending(&conversation, wednesday_utc()));
    assert!(!pending.has_pending(&other, wednesday_utc()));
}

#[rstest]
fn offered_lookup_leaves_the_question_open(
    candidates: Vec<Task>,
    conversation: ConversationId,
) {
    let pending = disambiguator();
    let first = candidates.first().cloned().expect("fixture task");
    pending.begin(&conversation, SelectionAction::Complete, candidates, wednesday_utc());

    assert_eq!(
        pending.offered(&conversation, first.id(), wednesday_utc()),
        Some(first)
    );
    assert_eq!(
        pending.offered(&conversation, TaskId::new(), wednesday_utc()),
        None
    );
    assert!(pending.has_pending(&conversation, wednesday_utc()));

    pending.clear(&conversation);
    assert!(!pending.has_pending(&conversation, wednesday_utc()));
}

#[rstest]
fn purge_removes_only_expired_questions(candidates: Vec<Task>, conversation: ConversationId) {
    let pending = disambiguator();
    let fresh = ConversationId::new("chat-2");
    pending.begin(&conversation, SelectionAction::Complete, candidates.clone(), wednesday_utc());
    pending.begin(
        &fresh,
        SelectionAction::Complete,
        candidates,
        wednesday_utc() + TimeDelta::minutes(5),
    );

    assert_eq!(pending.purge_expired(wednesday_utc() + TimeDelta::minutes(12)), 1);
    assert!(pending.pending(&conversation).is_none());
    assert!(pending.pending(&fresh).is_some());
}
