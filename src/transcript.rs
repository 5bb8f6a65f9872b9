//! Transcript segments and the time-to-segment mapping.
//!
//! The docent script is a fixed list of sentences, each tagged with the
//! half-open playback window `[start, end)` during which it is spoken.
//! Segments are built once at startup and never mutated afterwards.

use anyhow::{Result, bail};

/// One transcript sentence with its playback window, in seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
    pub text: String,
    pub index: usize,
}

/// An ordered, validated list of segments.
#[derive(Debug, Clone)]
pub struct Transcript {
    segments: Vec<Segment>,
}

impl Transcript {
    /// Build a transcript from `(start, end, text)` triples.
    ///
    /// Starts must be non-decreasing and every window non-empty.
    pub fn new<S: Into<String>>(entries: Vec<(f32, f32, S)>) -> Result<Self> {
        let mut segments = Vec::with_capacity(entries.len());
        let mut last_start = f32::NEG_INFINITY;

        for (index, (start, end, text)) in entries.into_iter().enumerate() {
            if !start.is_finite() || !end.is_finite() {
                bail!("Segment {index} has a non-finite window ({start}..{end})");
            }
            if start >= end {
                bail!("Segment {index} has an empty window ({start}..{end})");
            }
            if start < last_start {
                bail!("Segment {index} starts before its predecessor ({start} < {last_start})");
            }
            last_start = start;
            segments.push(Segment {
                start,
                end,
                text: text.into(),
                index,
            });
        }

        Ok(Transcript { segments })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Map a playback position to the segment spoken at that instant.
    ///
    /// Windows are half-open, so a position sitting exactly on a boundary
    /// belongs to the later segment. Should two windows ever overlap, the
    /// later-declared segment wins; the scan runs the full list to keep
    /// that contract explicit.
    pub fn active_at(&self, position_secs: f32) -> Option<usize> {
        let mut active = None;
        for segment in &self.segments {
            if position_secs >= segment.start && position_secs < segment.end {
                active = Some(segment.index);
            }
        }
        active
    }
}

/// The built-in docent script for "The Starry Night".
pub fn sample_transcript() -> Transcript {
    let entries: Vec<(f32, f32, &str)> = vec![
        (0.0, 4.0, "오디오 도슨트 투어에 오신 것을 환영합니다."),
        (
            4.0,
            11.0,
            "지금 여러분 앞에 있는 작품은 빈센트 반 고흐의 가장 유명한 걸작, '별이 빛나는 밤'입니다.",
        ),
        (
            11.0,
            18.0,
            "1889년 6월에 그려진 이 그림은, 생레미 요양원 그의 방 동쪽 창문에서 바라본 풍경을 묘사하고 있습니다.",
        ),
        (
            18.0,
            26.0,
            "소용돌이치며 격렬하게 움직이는 하늘을 주목해 보세요. 이는 작가의 깊은 내면과 혼란스러운 감정을 생생하게 반영합니다.",
        ),
        (
            26.0,
            34.0,
            "별과 초승달의 강렬하고 생동감 넘치는 노란색은, 밤하늘의 깊고 우울한 푸른빛과 예리한 대조를 이룹니다.",
        ),
        (
            34.0,
            41.0,
            "언덕 아래에는 조용한 마을이 자리 잡고 있습니다. 마을을 압도하듯 솟아오른 교회 첨탑은 요동치는 하늘에 맞서 안정감을 더해줍니다.",
        ),
        (
            41.0,
            51.0,
            "고흐는 동생 테오에게 이렇게 편지를 썼습니다. '오늘 아침 해가 뜨기 한참 전, 아주 커다랗게 빛나는 샛별 외에는 아무것도 없는 창밖의 시골 풍경을 보았다.'",
        ),
        (
            51.0,
            60.0,
            "이 작품은 단순한 풍경화가 아닙니다. 그것은 깊은 영혼의 고독이자, 빛나는 별들 속에서 찾아낸 꺼지지 않는 희망의 표현입니다.",
        ),
    ];

    // The built-in script is known-good; construction cannot fail here.
    Transcript::new(entries).unwrap_or_else(|_| Transcript { segments: Vec::new() })
}

#[cfg(test)]
mod tests {
    use super::{Transcript, sample_transcript};

    fn two_segments() -> Transcript {
        Transcript::new(vec![(0.0, 4.0, "first"), (4.0, 11.0, "second")]).unwrap()
    }

    #[test]
    fn maps_position_inside_window() {
        let transcript = two_segments();
        assert_eq!(transcript.active_at(2.5), Some(0));
        assert_eq!(transcript.active_at(7.0), Some(1));
    }

    #[test]
    fn boundary_belongs_to_later_segment() {
        let transcript = two_segments();
        assert_eq!(transcript.active_at(4.0), Some(1));
    }

    #[test]
    fn no_segment_outside_all_windows() {
        let transcript = two_segments();
        assert_eq!(transcript.active_at(11.0), None);
        assert_eq!(transcript.active_at(-1.0), None);
    }

    #[test]
    fn later_declared_segment_wins_on_overlap() {
        let transcript =
            Transcript::new(vec![(0.0, 10.0, "outer"), (2.0, 5.0, "inner")]).unwrap();
        assert_eq!(transcript.active_at(3.0), Some(1));
        assert_eq!(transcript.active_at(7.0), Some(0));
    }

    #[test]
    fn rejects_empty_window() {
        assert!(Transcript::new(vec![(3.0, 3.0, "bad")]).is_err());
    }

    #[test]
    fn rejects_decreasing_starts() {
        assert!(Transcript::new(vec![(5.0, 8.0, "a"), (1.0, 2.0, "b")]).is_err());
    }

    #[test]
    fn sample_script_is_valid_and_contiguous() {
        let transcript = sample_transcript();
        assert_eq!(transcript.len(), 8);
        assert_eq!(transcript.active_at(0.0), Some(0));
        assert_eq!(transcript.active_at(59.9), Some(7));
        assert_eq!(transcript.active_at(60.0), None);
    }
}
