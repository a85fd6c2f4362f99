// ==========================================
// 排班优化引擎 - 公平分数
// ==========================================
// 分数 = work_count * 10 + 抖动[0, 5) - (希望日 ? 50 : 0)
// 分数越低越优先
// ==========================================

/// 每出勤一天增加的分数（公平项）
pub const WORKLOAD_WEIGHT: f64 = 10.0;

/// 抖动幅度，小于 WORKLOAD_WEIGHT，只在同负荷人员间打破平局
pub const JITTER_SPAN: f64 = 5.0;

/// 希望日奖励，压过公平项与抖动
pub const PREFERENCE_BONUS: f64 = 50.0;

/// 计算公平分数
///
/// # 参数
/// - work_count: 本次运行已出勤天数
/// - preferred: 当日是否为希望日
/// - jitter_unit: [0, 1) 随机数
pub fn fairness_score(work_count: u32, preferred: bool, jitter_unit: f64) -> f64 {
    let mut score = work_count as f64 * WORKLOAD_WEIGHT;
    score += jitter_unit * JITTER_SPAN;
    if preferred {
        score -= PREFERENCE_BONUS;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_workload_wins_regardless_of_jitter() {
        let light = fairness_score(1, false, 0.999);
        let heavy = fairness_score(2, false, 0.0);
        assert!(light < heavy);
    }

    #[test]
    fn test_preference_outweighs_workload() {
        let preferred = fairness_score(4, true, 0.999);
        let idle = fairness_score(0, false, 0.0);
        assert!(preferred < idle);
    }

    #[test]
    fn test_base_values() {
        assert_eq!(fairness_score(0, false, 0.0), 0.0);
        assert_eq!(fairness_score(3, false, 0.5), 32.5);
        assert_eq!(fairness_score(0, true, 0.0), -50.0);
    }
}
