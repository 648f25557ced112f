#![cfg(test)]

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};

use crate::{
    api::{Comment, CommentId, Error, ReplyId, UserId},
    Clock, CommentStore, Config, MemorySlot, Persistence,
};

const SEED: &str = r#"[
    {"id": 100, "text": "theirs", "userId": "someone-else", "replies": [
        {"id": 101, "text": "their reply", "userId": "someone-else"},
        {"id": 102, "text": "my reply", "userId": "random-id"}
    ]},
    {"id": 103, "text": "mine", "userId": "random-id", "replies": [
        {"id": 104, "text": "their reply on mine", "userId": "someone-else"}
    ]}
]"#;

/// Every call happens within the same millisecond
struct FrozenClock;

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(100).unwrap()
    }
}

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum FuzzOp {
    AddComment(#[generator(bolero::generator::gen_with::<String>().len(0..10usize))] String),
    DeleteComment {
        idx: usize,
    },
    SetPendingReply {
        idx: usize,
        #[generator(bolero::generator::gen_with::<String>().len(0..10usize))]
        text: String,
    },
    SubmitReply {
        idx: usize,
    },
    DeleteReply {
        idx: usize,
        reply_idx: usize,
    },
    DeleteMissing {
        id: i64,
    },
    Reload,
}

struct Fuzzer {
    slot: MemorySlot,
    store: CommentStore,
    foreign_comments: HashSet<CommentId>,
    foreign_replies: HashSet<(CommentId, ReplyId)>,
}

impl Fuzzer {
    fn new() -> Fuzzer {
        let slot = MemorySlot::new();
        slot.set_raw("comments", String::from(SEED));
        let store = Fuzzer::open(&slot);
        let other = UserId::from("someone-else");
        let mut foreign_comments = HashSet::new();
        let mut foreign_replies = HashSet::new();
        for c in store.comments() {
            if c.user_id == other {
                foreign_comments.insert(c.id);
            }
            for r in c.replies.iter().filter(|r| r.user_id == other) {
                foreign_replies.insert((c.id, r.id));
            }
        }
        Fuzzer {
            slot,
            store,
            foreign_comments,
            foreign_replies,
        }
    }

    fn open(slot: &MemorySlot) -> CommentStore {
        CommentStore::with_clock(
            Config::default(),
            Box::new(slot.clone()),
            Box::new(FrozenClock),
        )
    }

    fn comment_at(&self, idx: usize) -> Option<&Comment> {
        let comments = self.store.comments();
        match comments.len() {
            0 => None,
            n => Some(&comments[idx % n]),
        }
    }

    fn execute(&mut self, op: &FuzzOp) {
        let res = match op {
            FuzzOp::AddComment(text) => self.store.add_comment(text.clone()).map(|_| ()),
            FuzzOp::DeleteComment { idx } => match self.comment_at(*idx).map(|c| c.id) {
                None => return,
                Some(id) => self.store.delete_comment(id),
            },
            FuzzOp::SetPendingReply { idx, text } => match self.comment_at(*idx).map(|c| c.id) {
                None => return,
                Some(id) => {
                    self.store.set_pending_reply(id, text.clone());
                    Ok(())
                }
            },
            FuzzOp::SubmitReply { idx } => match self.comment_at(*idx).map(|c| c.id) {
                None => return,
                Some(id) => self.store.submit_reply(id).map(|_| ()),
            },
            FuzzOp::DeleteReply { idx, reply_idx } => {
                let target = self.comment_at(*idx).and_then(|c| match c.replies.len() {
                    0 => None,
                    n => Some((c.id, c.replies[reply_idx % n].id)),
                });
                match target {
                    None => return,
                    Some((c, r)) => self.store.delete_reply(c, r),
                }
            }
            FuzzOp::DeleteMissing { id } => {
                if self.store.comments().iter().any(|c| c.id.0 == *id) {
                    return;
                }
                let res = self.store.delete_comment(CommentId(*id));
                assert_eq!(res, Err(Error::UnknownComment(CommentId(*id))));
                res
            }
            FuzzOp::Reload => {
                let before = self.store.comments().to_vec();
                self.store = Fuzzer::open(&self.slot);
                assert_eq!(self.store.comments(), &before[..]);
                Ok(())
            }
        };
        if let Err(e) = res {
            assert!(e.is_rejection(), "unexpected error {e:?} for {op:?}");
        }
    }

    fn check_invariants(&self) {
        let comments = self.store.comments();

        let mut ids = HashSet::new();
        for c in comments {
            assert!(ids.insert(c.id.0), "duplicate comment id {:?}", c.id);
            for r in c.replies.iter() {
                assert!(ids.insert(r.id.0), "duplicate reply id {:?}", r.id);
            }
        }

        for id in self.foreign_comments.iter() {
            assert!(
                comments.iter().any(|c| c.id == *id),
                "foreign comment {id:?} was removed"
            );
        }
        for (cid, rid) in self.foreign_replies.iter() {
            if let Some(c) = comments.iter().find(|c| c.id == *cid) {
                assert!(c.reply(*rid).is_some(), "foreign reply {rid:?} was removed");
            }
        }

        assert_eq!(
            self.slot.load("comments").unwrap().unwrap(),
            comments,
            "saved state differs from memory"
        );
    }
}

#[test]
fn random_actions_keep_invariants() {
    bolero::check!()
        .with_generator(bolero::generator::gen_with::<Vec<FuzzOp>>().len(1..50usize))
        .for_each(|ops| {
            let mut fuzzer = Fuzzer::new();
            fuzzer.check_invariants();
            for op in ops.iter() {
                fuzzer.execute(op);
                fuzzer.check_invariants();
            }
        })
}
