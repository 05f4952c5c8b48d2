//! Sentence rendering for metric results
//!
//! Labels are a pure function of metric, verdict and evidence. Japanese is
//! the application's native language and the default; English renders the
//! same buckets with the same numbers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Evidence, Metric, Verdict};
use crate::error::{RapportError, Result};

/// Language labels are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl FromStr for Locale {
    type Err = RapportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ja" => Ok(Locale::Ja),
            "en" => Ok(Locale::En),
            other => Err(RapportError::unsupported("locale", other, "ja, en")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Ja => write!(f, "ja"),
            Locale::En => write!(f, "en"),
        }
    }
}

/// Render the sentence for a result
pub fn render(metric: Metric, verdict: Verdict, evidence: &Evidence, locale: Locale) -> String {
    if verdict == Verdict::InsufficientData {
        return insufficient(metric, evidence, locale);
    }
    match locale {
        Locale::Ja => render_ja(verdict, evidence),
        Locale::En => render_en(verdict, evidence),
    }
}

fn insufficient(metric: Metric, evidence: &Evidence, locale: Locale) -> String {
    let min_len = evidence.min_len.unwrap_or_else(|| metric.min_len());
    match (locale, metric) {
        (Locale::Ja, Metric::Silence) => "沈黙の分析には会話が少なすぎます".to_string(),
        (Locale::Ja, Metric::Response) => "応答の分析には会話が少なすぎます".to_string(),
        (Locale::Ja, Metric::Flow) => "会話の流れを分析するには少し短すぎます".to_string(),
        (Locale::Ja, Metric::Relationship) => "会話がまだ始まっていません".to_string(),
        (Locale::Ja, _) => "会話がまだありません".to_string(),
        (Locale::En, Metric::Silence) => format!(
            "Too few messages to analyze silences (need at least {min_len})"
        ),
        (Locale::En, Metric::Response) => format!(
            "Too few messages to analyze responses (need at least {min_len})"
        ),
        (Locale::En, Metric::Flow) => format!(
            "Too short to analyze the flow of conversation (need at least {min_len} messages)"
        ),
        (Locale::En, Metric::Relationship) => "The conversation has not started yet".to_string(),
        (Locale::En, _) => "No conversation yet".to_string(),
    }
}

fn render_ja(verdict: Verdict, e: &Evidence) -> String {
    let count = e.count.unwrap_or(0);
    let pct = e.percent.unwrap_or(0);
    let gap = e.mean_gap_secs.unwrap_or(0);
    let switch = e.switch_percent.unwrap_or(0);
    let minutes = e.minutes.unwrap_or(0);
    let days = e.days.unwrap_or(0);
    let unique = e.unique_tokens.unwrap_or(0);

    match verdict {
        Verdict::SelfDominates => format!("あなたの発言が多めでした（{pct}%）"),
        Verdict::SelfListens => format!("相手の話をよく聞いていました（{pct}%）"),
        Verdict::Balanced => format!("バランスの取れた会話でした（{pct}%）"),
        Verdict::NoQuestions => {
            "問いかけはありませんでした。沈黙や受け止める時間が多かったかも".to_string()
        }
        Verdict::ManyQuestions => {
            format!("問いかけが多く、関係性を探る姿勢が見られました（{count}件）")
        }
        Verdict::ModerateQuestions => {
            format!("問いが適度に含まれていて、会話に流れがありました（{count}件）")
        }
        Verdict::LongSilences => {
            format!("沈黙の余白が長く、安心感を生む会話だったかもしれません（平均 {gap}秒）")
        }
        Verdict::ModeratePacing => {
            format!("適度な間があり、問いや受け止めが活きていたようです（平均 {gap}秒）")
        }
        Verdict::BriskPace => format!("テンポよく会話が進みました（平均 {gap}秒）"),
        Verdict::EmotionRestrained => {
            "感情表現は控えめでした。沈黙や問いが中心だったかも".to_string()
        }
        Verdict::EmotionShared => {
            format!("感情を共有することで、関係性が深まっていたようです（{count}件）")
        }
        Verdict::EmotionModerate => format!("感情語が適度に使われていました（{count}件）"),
        Verdict::AttentiveResponder => {
            format!("相手の言葉をよく受け止めていました（応答率 {pct}%）")
        }
        Verdict::QuestionOrSilenceCentered => {
            format!("問いや沈黙が中心の会話だったかもしれません（応答率 {pct}%）")
        }
        Verdict::SustainedConversation => format!(
            "継続的なやりとりがあり、関係性が育っているようです（{count}件・{minutes}分）"
        ),
        Verdict::BriefConversation => format!("短めの会話でした（{count}件・{minutes}分）"),
        Verdict::RichVocabulary => {
            format!("語彙が豊かで、多様な話題が展開されていました（{unique}種類）")
        }
        Verdict::ModerateVocabulary => format!(
            "適度な語彙の広がりがあり、問いが自然に展開されていました（{unique}種類）"
        ),
        Verdict::LimitedVocabulary => format!("語彙は少なめでした（{unique}種類）"),
        Verdict::HighDisclosure => {
            format!("自己開示が多く、関係性が深まっていたようです（{count}件）")
        }
        Verdict::ModerateDisclosure => format!(
            "自分のことを適度に語ることで、安心感が育まれていたようです（{count}件）"
        ),
        Verdict::ReservedDisclosure => format!(
            "自己開示は控えめでした。問いや沈黙が中心だったかもしれません（{count}件）"
        ),
        Verdict::SustainedDialogue => {
            format!("この関係は {days} 日間続いており、継続的な対話が育っています")
        }
        Verdict::StableExchange => {
            format!("この関係は {days} 日間続いており、安定したやりとりが見られます")
        }
        Verdict::BuddingDialogue => {
            format!("この関係は {days} 日間続いており、対話の芽が育ち始めています")
        }
        Verdict::JustStarted => format!(
            "会話は始まったばかりで、これから関係性が育っていくかもしれません（{days}日）"
        ),
        Verdict::NaturalFlow => format!(
            "自然な流れで会話が続いていました（平均間隔 {gap}秒・交互率 {switch}%）"
        ),
        Verdict::ModerateTempo => format!(
            "適度なテンポで会話が展開されていました（平均間隔 {gap}秒・交互率 {switch}%）"
        ),
        Verdict::IntermittentFlow => format!(
            "間が空きがちで、会話の流れはやや途切れがちでした（平均間隔 {gap}秒・交互率 {switch}%）"
        ),
        Verdict::InsufficientData => String::new(),
    }
}

fn render_en(verdict: Verdict, e: &Evidence) -> String {
    let count = e.count.unwrap_or(0);
    let pct = e.percent.unwrap_or(0);
    let gap = e.mean_gap_secs.unwrap_or(0);
    let switch = e.switch_percent.unwrap_or(0);
    let minutes = e.minutes.unwrap_or(0);
    let days = e.days.unwrap_or(0);
    let unique = e.unique_tokens.unwrap_or(0);

    match verdict {
        Verdict::SelfDominates => format!("You did most of the talking ({pct}%)"),
        Verdict::SelfListens => format!("You listened closely to your partner ({pct}%)"),
        Verdict::Balanced => format!("A well-balanced conversation ({pct}%)"),
        Verdict::NoQuestions => {
            "No questions asked; there may have been room for silence and listening".to_string()
        }
        Verdict::ManyQuestions => {
            format!("Many questions, exploring the relationship ({count} messages)")
        }
        Verdict::ModerateQuestions => {
            format!("A moderate number of questions kept the conversation flowing ({count} messages)")
        }
        Verdict::LongSilences => {
            format!("Long silences; the pace may have built a sense of comfort (mean {gap}s)")
        }
        Verdict::ModeratePacing => {
            format!("Moderate pauses gave questions room to land (mean {gap}s)")
        }
        Verdict::BriskPace => format!("The conversation moved at a brisk pace (mean {gap}s)"),
        Verdict::EmotionRestrained => {
            "Emotional language was restrained; silence or questions may have led".to_string()
        }
        Verdict::EmotionShared => {
            format!("Sharing feelings seems to have deepened the relationship ({count} messages)")
        }
        Verdict::EmotionModerate => {
            format!("Emotional words were used in moderation ({count} messages)")
        }
        Verdict::AttentiveResponder => {
            format!("You responded attentively to your partner (response rate {pct}%)")
        }
        Verdict::QuestionOrSilenceCentered => format!(
            "The conversation may have centered on questions or silence (response rate {pct}%)"
        ),
        Verdict::SustainedConversation => format!(
            "A sustained exchange; the relationship seems to be growing ({count} messages, {minutes} min)"
        ),
        Verdict::BriefConversation => {
            format!("A brief conversation ({count} messages, {minutes} min)")
        }
        Verdict::RichVocabulary => {
            format!("Rich vocabulary across many topics ({unique} distinct words)")
        }
        Verdict::ModerateVocabulary => {
            format!("A moderate spread of vocabulary ({unique} distinct words)")
        }
        Verdict::LimitedVocabulary => format!("Vocabulary was limited ({unique} distinct words)"),
        Verdict::HighDisclosure => {
            format!("Lots of self-disclosure; the relationship seems to be deepening ({count} messages)")
        }
        Verdict::ModerateDisclosure => {
            format!("Talking about yourself in moderation built a sense of comfort ({count} messages)")
        }
        Verdict::ReservedDisclosure => format!(
            "Self-disclosure was reserved; questions or silence may have led ({count} messages)"
        ),
        Verdict::SustainedDialogue => {
            format!("This relationship has lasted {days} days; a sustained dialogue is growing")
        }
        Verdict::StableExchange => {
            format!("This relationship has lasted {days} days with a stable exchange")
        }
        Verdict::BuddingDialogue => {
            format!("This relationship has lasted {days} days; a dialogue is starting to bud")
        }
        Verdict::JustStarted => {
            format!("The conversation has just started; the relationship may grow from here ({days} days)")
        }
        Verdict::NaturalFlow => {
            format!("The conversation flowed naturally (mean gap {gap}s, turn switches {switch}%)")
        }
        Verdict::ModerateTempo => {
            format!("The conversation moved at a moderate tempo (mean gap {gap}s, turn switches {switch}%)")
        }
        Verdict::IntermittentFlow => format!(
            "Gaps were common and the flow was intermittent (mean gap {gap}s, turn switches {switch}%)"
        ),
        Verdict::InsufficientData => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_sentences_per_metric() {
        let e = Evidence::default();
        let ja = |m| render(m, Verdict::InsufficientData, &e, Locale::Ja);
        assert_eq!(ja(Metric::Balance), "会話がまだありません");
        assert_eq!(ja(Metric::Relationship), "会話がまだ始まっていません");
        assert_eq!(ja(Metric::Silence), "沈黙の分析には会話が少なすぎます");
        assert_eq!(ja(Metric::Response), "応答の分析には会話が少なすぎます");
        assert_eq!(ja(Metric::Flow), "会話の流れを分析するには少し短すぎます");
        assert_eq!(
            render(Metric::Flow, Verdict::InsufficientData, &e, Locale::En),
            "Too short to analyze the flow of conversation (need at least 4 messages)"
        );
    }

    #[test]
    fn test_labels_embed_evidence() {
        let e = Evidence {
            count: Some(21),
            minutes: Some(31),
            ..Default::default()
        };
        assert_eq!(
            render(Metric::Length, Verdict::SustainedConversation, &e, Locale::Ja),
            "継続的なやりとりがあり、関係性が育っているようです（21件・31分）"
        );
        assert!(render(Metric::Length, Verdict::SustainedConversation, &e, Locale::En)
            .contains("21 messages, 31 min"));
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }
}
