use chrono::{DateTime, TimeZone, Utc};
use ::common::{
    Contest, ContestQuestion, ContestStatus, Coordinator, Difficulty, Eligibility, Group,
    GroupOnContest, Member, Question, QuestionRef, Submission,
};

/// A timestamp on contest day.
pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, hour, minute, 0).unwrap()
}

pub fn question(id: &str, points: i64) -> ContestQuestion {
    ContestQuestion {
        question: Question {
            id: id.into(),
            link: None,
            difficulty: Difficulty::Medium,
            points,
            slug: format!("{id}-slug"),
        },
    }
}

pub fn submission(question_id: &str, score: i64, time: DateTime<Utc>) -> Submission {
    Submission {
        id: format!("sub-{question_id}-{}", time.timestamp()),
        score,
        status: "ACCEPTED".into(),
        created_at: time,
        question: QuestionRef {
            id: question_id.into(),
            slug: format!("{question_id}-slug"),
            points: score,
        },
    }
}

pub fn member(id: &str, submissions: Vec<Submission>) -> Member {
    Member {
        id: id.into(),
        username: format!("user-{id}"),
        submissions,
        eligibility: Eligibility::Eligible,
    }
}

pub fn disqualified(id: &str, submissions: Vec<Submission>) -> Member {
    Member {
        eligibility: Eligibility::Disqualified,
        ..member(id, submissions)
    }
}

pub fn group_entry(id: &str, score: i64, members: Vec<Member>) -> GroupOnContest {
    GroupOnContest {
        id: id.into(),
        score,
        group: Some(Group {
            id: format!("group-{id}"),
            name: format!("Team {id}"),
            score,
            coordinator: Some(Coordinator {
                username: format!("coach-{id}"),
            }),
            members,
        }),
    }
}

pub fn contest(questions: Vec<ContestQuestion>, groups: Vec<GroupOnContest>) -> Contest {
    Contest {
        id: 42,
        start_time: at(9, 0),
        end_time: at(12, 0),
        status: ContestStatus::Completed,
        questions,
        attempted_groups: groups,
    }
}
