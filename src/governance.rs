// Mock governance: a fixed proposal board with one vote per proposal per
// session. Voting power is supplied by the caller (available + staked tokens).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GovernanceError {
    #[error("no voting power")]
    NoVotingPower,
    #[error("unknown proposal")]
    UnknownProposal,
    #[error("voting closed")]
    VotingClosed,
    #[error("already voted on this proposal")]
    AlreadyVoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Active,
    Passed,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    For,
    Against,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub votes_for: u64,
    pub votes_against: u64,
    pub total_voters: u64,
    pub status: ProposalStatus,
    pub ends_in: String,
    pub user_vote: Option<VoteChoice>,
}

impl Proposal {
    /// Share of FOR votes; 50.0 when nobody has voted.
    pub fn for_percentage(&self) -> f64 {
        let total = self.votes_for.saturating_add(self.votes_against);
        if total == 0 {
            50.0
        } else {
            self.votes_for as f64 / total as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GovernanceBoard {
    proposals: Vec<Proposal>,
}

impl GovernanceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The standing board shipped with the simulation.
    pub fn seeded() -> Self {
        let proposals = vec![
            Proposal {
                id: "1".to_string(),
                title: "Burn 10% of Total Supply".to_string(),
                description: "Proposal to permanently burn 10% of the circulating ILHAM supply to increase scarcity.".to_string(),
                votes_for: 850_000,
                votes_against: 320_000,
                total_voters: 1_245,
                status: ProposalStatus::Active,
                ends_in: "2 days".to_string(),
                user_vote: None,
            },
            Proposal {
                id: "2".to_string(),
                title: "Increase Staking Rewards to 2%".to_string(),
                description: "Double the staking reward rate from 1% to 2% per reward cycle.".to_string(),
                votes_for: 620_000,
                votes_against: 580_000,
                total_voters: 987,
                status: ProposalStatus::Active,
                ends_in: "5 days".to_string(),
                user_vote: None,
            },
            Proposal {
                id: "3".to_string(),
                title: "Add New Trading Pair".to_string(),
                description: "List ILHAM/USDC trading pair on the simulated DEX.".to_string(),
                votes_for: 920_000,
                votes_against: 150_000,
                total_voters: 1_543,
                status: ProposalStatus::Passed,
                ends_in: "Ended".to_string(),
                user_vote: None,
            },
        ];
        Self { proposals }
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn get(&self, id: &str) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == id)
    }

    /// Cast the session's vote on a proposal. All-or-nothing: any failure
    /// leaves the tallies unchanged.
    pub fn vote(
        &mut self,
        id: &str,
        choice: VoteChoice,
        voting_power: u64,
    ) -> Result<(), GovernanceError> {
        if voting_power == 0 {
            return Err(GovernanceError::NoVotingPower);
        }
        let p = self
            .proposals
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GovernanceError::UnknownProposal)?;
        if p.status != ProposalStatus::Active {
            return Err(GovernanceError::VotingClosed);
        }
        if p.user_vote.is_some() {
            return Err(GovernanceError::AlreadyVoted);
        }
        match choice {
            VoteChoice::For => p.votes_for = p.votes_for.saturating_add(voting_power),
            VoteChoice::Against => p.votes_against = p.votes_against.saturating_add(voting_power),
        }
        p.total_voters = p.total_voters.saturating_add(1);
        p.user_vote = Some(choice);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_adds_power_to_chosen_side() {
        let mut board = GovernanceBoard::seeded();
        board.vote("1", VoteChoice::For, 1_000).expect("vote");
        let p = board.get("1").expect("proposal");
        assert_eq!(p.votes_for, 851_000);
        assert_eq!(p.votes_against, 320_000);
        assert_eq!(p.total_voters, 1_246);
        assert_eq!(p.user_vote, Some(VoteChoice::For));
    }

    #[test]
    fn second_vote_on_same_proposal_fails() {
        let mut board = GovernanceBoard::seeded();
        board.vote("2", VoteChoice::Against, 500).expect("vote");
        let before = board.get("2").expect("proposal").clone();
        assert_eq!(
            board.vote("2", VoteChoice::For, 500),
            Err(GovernanceError::AlreadyVoted)
        );
        let after = board.get("2").expect("proposal");
        assert_eq!(after.votes_for, before.votes_for);
        assert_eq!(after.votes_against, before.votes_against);
        assert_eq!(after.total_voters, before.total_voters);
    }

    #[test]
    fn closed_proposal_rejects_votes() {
        let mut board = GovernanceBoard::seeded();
        assert_eq!(
            board.vote("3", VoteChoice::For, 500),
            Err(GovernanceError::VotingClosed)
        );
    }

    #[test]
    fn zero_power_cannot_vote() {
        let mut board = GovernanceBoard::seeded();
        assert_eq!(
            board.vote("1", VoteChoice::For, 0),
            Err(GovernanceError::NoVotingPower)
        );
        assert_eq!(board.get("1").expect("proposal").votes_for, 850_000);
    }

    #[test]
    fn unknown_proposal_is_an_error() {
        let mut board = GovernanceBoard::seeded();
        assert_eq!(
            board.vote("99", VoteChoice::For, 500),
            Err(GovernanceError::UnknownProposal)
        );
    }

    #[test]
    fn for_percentage_handles_empty_tally() {
        let p = Proposal {
            id: "x".to_string(),
            title: String::new(),
            description: String::new(),
            votes_for: 0,
            votes_against: 0,
            total_voters: 0,
            status: ProposalStatus::Active,
            ends_in: String::new(),
            user_vote: None,
        };
        assert_eq!(p.for_percentage(), 50.0);
    }
}
