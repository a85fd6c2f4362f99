// ==========================================
// 排班优化引擎 - 日期工具
// ==========================================

use chrono::NaiveDate;

/// 展开闭区间 [start, end] 为升序日期列表
///
/// # 返回
/// - end < start 时返回空列表
///
/// # 示例
/// ```
/// use chrono::NaiveDate;
/// use shift_optimizer::domain::calendar::expand_date_range;
///
/// let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(expand_date_range(start, end).len(), 3);
/// ```
pub fn expand_date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    if end < start {
        return Vec::new();
    }
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// 区间包含的天数（end < start 时为 0）
pub fn range_len(start: NaiveDate, end: NaiveDate) -> usize {
    if end < start {
        0
    } else {
        (end - start).num_days() as usize + 1
    }
}

/// 从 date 的前一天开始倒序取最多 days 天
pub fn preceding_days(date: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(date.pred_opt(), |d| d.pred_opt()).take(days as usize)
}

/// 第一个不满足严格升序的位置 (previous, current)
pub fn first_out_of_order(dates: &[NaiveDate]) -> Option<(NaiveDate, NaiveDate)> {
    dates
        .windows(2)
        .find(|w| w[1] <= w[0])
        .map(|w| (w[0], w[1]))
}
