//! Prints a comment snapshot to paste into the `comments` local storage key

use rand::Rng;
use remarque_api::{Comment, CommentId, Reply, ReplyId, UserId};

const NUM_COMMENTS: usize = 20;
const MAX_REPLIES_PER_COMMENT: usize = 5;
const COMMENT_WORD_COUNT: usize = 20;
const REPLY_WORD_COUNT: usize = 8;

// Mid-November 2023, in milliseconds
const FIRST_ID: i64 = 1_700_000_000_000;

fn gen_user(rng: &mut impl Rng) -> UserId {
    // about half of everything is owned by the stub user, so that it can be deleted
    match rng.gen_range(0..4) {
        0 | 1 => UserId::stub(),
        2 => UserId::from("alice"),
        _ => UserId::from("bob"),
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let mut next_id = FIRST_ID;
    let mut gen_id = |rng: &mut rand::rngs::ThreadRng| {
        next_id += rng.gen_range(1..60_000);
        next_id
    };

    let mut comments = Vec::with_capacity(NUM_COMMENTS);
    for _ in 0..NUM_COMMENTS {
        let mut c = Comment::new(
            CommentId(gen_id(&mut rng)),
            lipsum::lipsum_words(COMMENT_WORD_COUNT),
            gen_user(&mut rng),
        );
        for _ in 0..rng.gen_range(0..=MAX_REPLIES_PER_COMMENT) {
            c.replies.push(Reply {
                id: ReplyId(gen_id(&mut rng)),
                text: lipsum::lipsum_words(REPLY_WORD_COUNT),
                user_id: gen_user(&mut rng),
            });
        }
        comments.push(c);
    }

    println!("{}", serde_json::to_string_pretty(&comments)?);
    Ok(())
}
