// 单元测试用确定性随机源: 不洗牌、固定抖动、固定人数与模板
use crate::engine::random::RandomSource;

pub(crate) struct ScriptedRandom {
    pub jitter: f64,
    pub pick_high: bool,
    pub pattern_index: usize,
}

impl ScriptedRandom {
    pub(crate) fn zero_jitter() -> Self {
        Self {
            jitter: 0.0,
            pick_high: false,
            pattern_index: 0,
        }
    }

    pub(crate) fn high_headcount() -> Self {
        Self {
            pick_high: true,
            ..Self::zero_jitter()
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.jitter
    }

    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        if self.pick_high {
            high
        } else {
            low
        }
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.pattern_index.min(len - 1)
    }

    fn shuffle<T>(&mut self, _items: &mut [T])
    where
        Self: Sized,
    {
    }
}
