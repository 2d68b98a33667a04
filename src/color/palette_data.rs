//! 标准调色板数据
//!
//! Plan9 表逐项抄录自 Plan 9 操作系统的 256 色调色板，不能由公式重新生成；
//! WebSafe 表在编译期由 6x6x6 立方生成。

use super::Color;

/// Plan9 调色板长度
pub const PLAN9_LEN: usize = 256;

/// WebSafe 调色板长度
pub const WEB_SAFE_LEN: usize = 216;

/// WebSafe 每个通道的级数
pub const WEB_SAFE_LEVELS: usize = 6;

/// WebSafe 相邻两级之间的通道差值 (0x00, 0x33, ... 0xff)
pub const WEB_SAFE_STEP: u8 = 0x33;

/// Plan 9 调色板
///
/// 将 24 位 RGB 空间划分为 4x4x4 的子立方，每个子立方 4 个色调。
/// 得到 16 级灰度、每种原色和间色 13 级色调，以及覆盖其余色彩立方的颜色，
/// 适合表现连续色调。
///
/// 参见 http://plan9.bell-labs.com/magic/man2html/6/color
pub const PLAN9: [Color; PLAN9_LEN] = [
    Color { r: 0x00, g: 0x00, b: 0x00, a: 0xff }, // index 0
    Color { r: 0x00, g: 0x00, b: 0x44, a: 0xff }, // index 1
    Color { r: 0x00, g: 0x00, b: 0x88, a: 0xff }, // index 2
    Color { r: 0x00, g: 0x00, b: 0xcc, a: 0xff }, // index 3
    Color { r: 0x00, g: 0x44, b: 0x00, a: 0xff }, // index 4
    Color { r: 0x00, g: 0x44, b: 0x44, a: 0xff }, // index 5
    Color { r: 0x00, g: 0x44, b: 0x88, a: 0xff }, // index 6
    Color { r: 0x00, g: 0x44, b: 0xcc, a: 0xff }, // index 7
    Color { r: 0x00, g: 0x88, b: 0x00, a: 0xff }, // index 8
    Color { r: 0x00, g: 0x88, b: 0x44, a: 0xff }, // index 9
    Color { r: 0x00, g: 0x88, b: 0x88, a: 0xff }, // index 10
    Color { r: 0x00, g: 0x88, b: 0xcc, a: 0xff }, // index 11
    Color { r: 0x00, g: 0xcc, b: 0x00, a: 0xff }, // index 12
    Color { r: 0x00, g: 0xcc, b: 0x44, a: 0xff }, // index 13
    Color { r: 0x00, g: 0xcc, b: 0x88, a: 0xff }, // index 14
    Color { r: 0x00, g: 0xcc, b: 0xcc, a: 0xff }, // index 15
    Color { r: 0x00, g: 0xdd, b: 0xdd, a: 0xff }, // index 16
    Color { r: 0x11, g: 0x11, b: 0x11, a: 0xff }, // index 17
    Color { r: 0x00, g: 0x00, b: 0x55, a: 0xff }, // index 18
    Color { r: 0x00, g: 0x00, b: 0x99, a: 0xff }, // index 19
    Color { r: 0x00, g: 0x00, b: 0xdd, a: 0xff }, // index 20
    Color { r: 0x00, g: 0x55, b: 0x00, a: 0xff }, // index 21
    Color { r: 0x00, g: 0x55, b: 0x55, a: 0xff }, // index 22
    Color { r: 0x00, g: 0x4c, b: 0x99, a: 0xff }, // index 23
    Color { r: 0x00, g: 0x49, b: 0xdd, a: 0xff }, // index 24
    Color { r: 0x00, g: 0x99, b: 0x00, a: 0xff }, // index 25
    Color { r: 0x00, g: 0x99, b: 0x4c, a: 0xff }, // index 26
    Color { r: 0x00, g: 0x99, b: 0x99, a: 0xff }, // index 27
    Color { r: 0x00, g: 0x93, b: 0xdd, a: 0xff }, // index 28
    Color { r: 0x00, g: 0xdd, b: 0x00, a: 0xff }, // index 29
    Color { r: 0x00, g: 0xdd, b: 0x49, a: 0xff }, // index 30
    Color { r: 0x00, g: 0xdd, b: 0x93, a: 0xff }, // index 31
    Color { r: 0x00, g: 0xee, b: 0x9e, a: 0xff }, // index 32
    Color { r: 0x00, g: 0xee, b: 0xee, a: 0xff }, // index 33
    Color { r: 0x22, g: 0x22, b: 0x22, a: 0xff }, // index 34
    Color { r: 0x00, g: 0x00, b: 0x66, a: 0xff }, // index 35
    Color { r: 0x00, g: 0x00, b: 0xaa, a: 0xff }, // index 36
    Color { r: 0x00, g: 0x00, b: 0xee, a: 0xff }, // index 37
    Color { r: 0x00, g: 0x66, b: 0x00, a: 0xff }, // index 38
    Color { r: 0x00, g: 0x66, b: 0x66, a: 0xff }, // index 39
    Color { r: 0x00, g: 0x55, b: 0xaa, a: 0xff }, // index 40
    Color { r: 0x00, g: 0x4f, b: 0xee, a: 0xff }, // index 41
    Color { r: 0x00, g: 0xaa, b: 0x00, a: 0xff }, // index 42
    Color { r: 0x00, g: 0xaa, b: 0x55, a: 0xff }, // index 43
    Color { r: 0x00, g: 0xaa, b: 0xaa, a: 0xff }, // index 44
    Color { r: 0x00, g: 0x9e, b: 0xee, a: 0xff }, // index 45
    Color { r: 0x00, g: 0xee, b: 0x00, a: 0xff }, // index 46
    Color { r: 0x00, g: 0xee, b: 0x4f, a: 0xff }, // index 47
    Color { r: 0x00, g: 0xff, b: 0x55, a: 0xff }, // index 48
    Color { r: 0x00, g: 0xff, b: 0xaa, a: 0xff }, // index 49
    Color { r: 0x00, g: 0xff, b: 0xff, a: 0xff }, // index 50
    Color { r: 0x33, g: 0x33, b: 0x33, a: 0xff }, // index 51
    Color { r: 0x00, g: 0x00, b: 0x77, a: 0xff }, // index 52
    Color { r: 0x00, g: 0x00, b: 0xbb, a: 0xff }, // index 53
    Color { r: 0x00, g: 0x00, b: 0xff, a: 0xff }, // index 54
    Color { r: 0x00, g: 0x77, b: 0x00, a: 0xff }, // index 55
    Color { r: 0x00, g: 0x77, b: 0x77, a: 0xff }, // index 56
    Color { r: 0x00, g: 0x5d, b: 0xbb, a: 0xff }, // index 57
    Color { r: 0x00, g: 0x55, b: 0xff, a: 0xff }, // index 58
    Color { r: 0x00, g: 0xbb, b: 0x00, a: 0xff }, // index 59
    Color { r: 0x00, g: 0xbb, b: 0x5d, a: 0xff }, // index 60
    Color { r: 0x00, g: 0xbb, b: 0xbb, a: 0xff }, // index 61
    Color { r: 0x00, g: 0xaa, b: 0xff, a: 0xff }, // index 62
    Color { r: 0x00, g: 0xff, b: 0x00, a: 0xff }, // index 63
    Color { r: 0x44, g: 0x00, b: 0x44, a: 0xff }, // index 64
    Color { r: 0x44, g: 0x00, b: 0x88, a: 0xff }, // index 65
    Color { r: 0x44, g: 0x00, b: 0xcc, a: 0xff }, // index 66
    Color { r: 0x44, g: 0x44, b: 0x00, a: 0xff }, // index 67
    Color { r: 0x44, g: 0x44, b: 0x44, a: 0xff }, // index 68
    Color { r: 0x44, g: 0x44, b: 0x88, a: 0xff }, // index 69
    Color { r: 0x44, g: 0x44, b: 0xcc, a: 0xff }, // index 70
    Color { r: 0x44, g: 0x88, b: 0x00, a: 0xff }, // index 71
    Color { r: 0x44, g: 0x88, b: 0x44, a: 0xff }, // index 72
    Color { r: 0x44, g: 0x88, b: 0x88, a: 0xff }, // index 73
    Color { r: 0x44, g: 0x88, b: 0xcc, a: 0xff }, // index 74
    Color { r: 0x44, g: 0xcc, b: 0x00, a: 0xff }, // index 75
    Color { r: 0x44, g: 0xcc, b: 0x44, a: 0xff }, // index 76
    Color { r: 0x44, g: 0xcc, b: 0x88, a: 0xff }, // index 77
    Color { r: 0x44, g: 0xcc, b: 0xcc, a: 0xff }, // index 78
    Color { r: 0x44, g: 0x00, b: 0x00, a: 0xff }, // index 79
    Color { r: 0x55, g: 0x00, b: 0x00, a: 0xff }, // index 80
    Color { r: 0x55, g: 0x00, b: 0x55, a: 0xff }, // index 81
    Color { r: 0x4c, g: 0x00, b: 0x99, a: 0xff }, // index 82
    Color { r: 0x49, g: 0x00, b: 0xdd, a: 0xff }, // index 83
    Color { r: 0x55, g: 0x55, b: 0x00, a: 0xff }, // index 84
    Color { r: 0x55, g: 0x55, b: 0x55, a: 0xff }, // index 85
    Color { r: 0x4c, g: 0x4c, b: 0x99, a: 0xff }, // index 86
    Color { r: 0x49, g: 0x49, b: 0xdd, a: 0xff }, // index 87
    Color { r: 0x4c, g: 0x99, b: 0x00, a: 0xff }, // index 88
    Color { r: 0x4c, g: 0x99, b: 0x4c, a: 0xff }, // index 89
    Color { r: 0x4c, g: 0x99, b: 0x99, a: 0xff }, // index 90
    Color { r: 0x49, g: 0x93, b: 0xdd, a: 0xff }, // index 91
    Color { r: 0x49, g: 0xdd, b: 0x00, a: 0xff }, // index 92
    Color { r: 0x49, g: 0xdd, b: 0x49, a: 0xff }, // index 93
    Color { r: 0x49, g: 0xdd, b: 0x93, a: 0xff }, // index 94
    Color { r: 0x49, g: 0xdd, b: 0xdd, a: 0xff }, // index 95
    Color { r: 0x4f, g: 0xee, b: 0xee, a: 0xff }, // index 96
    Color { r: 0x66, g: 0x00, b: 0x00, a: 0xff }, // index 97
    Color { r: 0x66, g: 0x00, b: 0x66, a: 0xff }, // index 98
    Color { r: 0x55, g: 0x00, b: 0xaa, a: 0xff }, // index 99
    Color { r: 0x4f, g: 0x00, b: 0xee, a: 0xff }, // index 100
    Color { r: 0x66, g: 0x66, b: 0x00, a: 0xff }, // index 101
    Color { r: 0x66, g: 0x66, b: 0x66, a: 0xff }, // index 102
    Color { r: 0x55, g: 0x55, b: 0xaa, a: 0xff }, // index 103
    Color { r: 0x4f, g: 0x4f, b: 0xee, a: 0xff }, // index 104
    Color { r: 0x55, g: 0xaa, b: 0x00, a: 0xff }, // index 105
    Color { r: 0x55, g: 0xaa, b: 0x55, a: 0xff }, // index 106
    Color { r: 0x55, g: 0xaa, b: 0xaa, a: 0xff }, // index 107
    Color { r: 0x4f, g: 0x9e, b: 0xee, a: 0xff }, // index 108
    Color { r: 0x4f, g: 0xee, b: 0x00, a: 0xff }, // index 109
    Color { r: 0x4f, g: 0xee, b: 0x4f, a: 0xff }, // index 110
    Color { r: 0x4f, g: 0xee, b: 0x9e, a: 0xff }, // index 111
    Color { r: 0x55, g: 0xff, b: 0xaa, a: 0xff }, // index 112
    Color { r: 0x55, g: 0xff, b: 0xff, a: 0xff }, // index 113
    Color { r: 0x77, g: 0x00, b: 0x00, a: 0xff }, // index 114
    Color { r: 0x77, g: 0x00, b: 0x77, a: 0xff }, // index 115
    Color { r: 0x5d, g: 0x00, b: 0xbb, a: 0xff }, // index 116
    Color { r: 0x55, g: 0x00, b: 0xff, a: 0xff }, // index 117
    Color { r: 0x77, g: 0x77, b: 0x00, a: 0xff }, // index 118
    Color { r: 0x77, g: 0x77, b: 0x77, a: 0xff }, // index 119
    Color { r: 0x5d, g: 0x5d, b: 0xbb, a: 0xff }, // index 120
    Color { r: 0x55, g: 0x55, b: 0xff, a: 0xff }, // index 121
    Color { r: 0x5d, g: 0xbb, b: 0x00, a: 0xff }, // index 122
    Color { r: 0x5d, g: 0xbb, b: 0x5d, a: 0xff }, // index 123
    Color { r: 0x5d, g: 0xbb, b: 0xbb, a: 0xff }, // index 124
    Color { r: 0x55, g: 0xaa, b: 0xff, a: 0xff }, // index 125
    Color { r: 0x55, g: 0xff, b: 0x00, a: 0xff }, // index 126
    Color { r: 0x55, g: 0xff, b: 0x55, a: 0xff }, // index 127
    Color { r: 0x88, g: 0x00, b: 0x88, a: 0xff }, // index 128
    Color { r: 0x88, g: 0x00, b: 0xcc, a: 0xff }, // index 129
    Color { r: 0x88, g: 0x44, b: 0x00, a: 0xff }, // index 130
    Color { r: 0x88, g: 0x44, b: 0x44, a: 0xff }, // index 131
    Color { r: 0x88, g: 0x44, b: 0x88, a: 0xff }, // index 132
    Color { r: 0x88, g: 0x44, b: 0xcc, a: 0xff }, // index 133
    Color { r: 0x88, g: 0x88, b: 0x00, a: 0xff }, // index 134
    Color { r: 0x88, g: 0x88, b: 0x44, a: 0xff }, // index 135
    Color { r: 0x88, g: 0x88, b: 0x88, a: 0xff }, // index 136
    Color { r: 0x88, g: 0x88, b: 0xcc, a: 0xff }, // index 137
    Color { r: 0x88, g: 0xcc, b: 0x00, a: 0xff }, // index 138
    Color { r: 0x88, g: 0xcc, b: 0x44, a: 0xff }, // index 139
    Color { r: 0x88, g: 0xcc, b: 0x88, a: 0xff }, // index 140
    Color { r: 0x88, g: 0xcc, b: 0xcc, a: 0xff }, // index 141
    Color { r: 0x88, g: 0x00, b: 0x00, a: 0xff }, // index 142
    Color { r: 0x88, g: 0x00, b: 0x44, a: 0xff }, // index 143
    Color { r: 0x99, g: 0x00, b: 0x4c, a: 0xff }, // index 144
    Color { r: 0x99, g: 0x00, b: 0x99, a: 0xff }, // index 145
    Color { r: 0x93, g: 0x00, b: 0xdd, a: 0xff }, // index 146
    Color { r: 0x99, g: 0x4c, b: 0x00, a: 0xff }, // index 147
    Color { r: 0x99, g: 0x4c, b: 0x4c, a: 0xff }, // index 148
    Color { r: 0x99, g: 0x4c, b: 0x99, a: 0xff }, // index 149
    Color { r: 0x93, g: 0x49, b: 0xdd, a: 0xff }, // index 150
    Color { r: 0x99, g: 0x99, b: 0x00, a: 0xff }, // index 151
    Color { r: 0x99, g: 0x99, b: 0x4c, a: 0xff }, // index 152
    Color { r: 0x99, g: 0x99, b: 0x99, a: 0xff }, // index 153
    Color { r: 0x93, g: 0x93, b: 0xdd, a: 0xff }, // index 154
    Color { r: 0x93, g: 0xdd, b: 0x00, a: 0xff }, // index 155
    Color { r: 0x93, g: 0xdd, b: 0x49, a: 0xff }, // index 156
    Color { r: 0x93, g: 0xdd, b: 0x93, a: 0xff }, // index 157
    Color { r: 0x93, g: 0xdd, b: 0xdd, a: 0xff }, // index 158
    Color { r: 0x99, g: 0x00, b: 0x00, a: 0xff }, // index 159
    Color { r: 0xaa, g: 0x00, b: 0x00, a: 0xff }, // index 160
    Color { r: 0xaa, g: 0x00, b: 0x55, a: 0xff }, // index 161
    Color { r: 0xaa, g: 0x00, b: 0xaa, a: 0xff }, // index 162
    Color { r: 0x9e, g: 0x00, b: 0xee, a: 0xff }, // index 163
    Color { r: 0xaa, g: 0x55, b: 0x00, a: 0xff }, // index 164
    Color { r: 0xaa, g: 0x55, b: 0x55, a: 0xff }, // index 165
    Color { r: 0xaa, g: 0x55, b: 0xaa, a: 0xff }, // index 166
    Color { r: 0x9e, g: 0x4f, b: 0xee, a: 0xff }, // index 167
    Color { r: 0xaa, g: 0xaa, b: 0x00, a: 0xff }, // index 168
    Color { r: 0xaa, g: 0xaa, b: 0x55, a: 0xff }, // index 169
    Color { r: 0xaa, g: 0xaa, b: 0xaa, a: 0xff }, // index 170
    Color { r: 0x9e, g: 0x9e, b: 0xee, a: 0xff }, // index 171
    Color { r: 0x9e, g: 0xee, b: 0x00, a: 0xff }, // index 172
    Color { r: 0x9e, g: 0xee, b: 0x4f, a: 0xff }, // index 173
    Color { r: 0x9e, g: 0xee, b: 0x9e, a: 0xff }, // index 174
    Color { r: 0x9e, g: 0xee, b: 0xee, a: 0xff }, // index 175
    Color { r: 0xaa, g: 0xff, b: 0xff, a: 0xff }, // index 176
    Color { r: 0xbb, g: 0x00, b: 0x00, a: 0xff }, // index 177
    Color { r: 0xbb, g: 0x00, b: 0x5d, a: 0xff }, // index 178
    Color { r: 0xbb, g: 0x00, b: 0xbb, a: 0xff }, // index 179
    Color { r: 0xaa, g: 0x00, b: 0xff, a: 0xff }, // index 180
    Color { r: 0xbb, g: 0x5d, b: 0x00, a: 0xff }, // index 181
    Color { r: 0xbb, g: 0x5d, b: 0x5d, a: 0xff }, // index 182
    Color { r: 0xbb, g: 0x5d, b: 0xbb, a: 0xff }, // index 183
    Color { r: 0xaa, g: 0x55, b: 0xff, a: 0xff }, // index 184
    Color { r: 0xbb, g: 0xbb, b: 0x00, a: 0xff }, // index 185
    Color { r: 0xbb, g: 0xbb, b: 0x5d, a: 0xff }, // index 186
    Color { r: 0xbb, g: 0xbb, b: 0xbb, a: 0xff }, // index 187
    Color { r: 0xaa, g: 0xaa, b: 0xff, a: 0xff }, // index 188
    Color { r: 0xaa, g: 0xff, b: 0x00, a: 0xff }, // index 189
    Color { r: 0xaa, g: 0xff, b: 0x55, a: 0xff }, // index 190
    Color { r: 0xaa, g: 0xff, b: 0xaa, a: 0xff }, // index 191
    Color { r: 0xcc, g: 0x00, b: 0xcc, a: 0xff }, // index 192
    Color { r: 0xcc, g: 0x44, b: 0x00, a: 0xff }, // index 193
    Color { r: 0xcc, g: 0x44, b: 0x44, a: 0xff }, // index 194
    Color { r: 0xcc, g: 0x44, b: 0x88, a: 0xff }, // index 195
    Color { r: 0xcc, g: 0x44, b: 0xcc, a: 0xff }, // index 196
    Color { r: 0xcc, g: 0x88, b: 0x00, a: 0xff }, // index 197
    Color { r: 0xcc, g: 0x88, b: 0x44, a: 0xff }, // index 198
    Color { r: 0xcc, g: 0x88, b: 0x88, a: 0xff }, // index 199
    Color { r: 0xcc, g: 0x88, b: 0xcc, a: 0xff }, // index 200
    Color { r: 0xcc, g: 0xcc, b: 0x00, a: 0xff }, // index 201
    Color { r: 0xcc, g: 0xcc, b: 0x44, a: 0xff }, // index 202
    Color { r: 0xcc, g: 0xcc, b: 0x88, a: 0xff }, // index 203
    Color { r: 0xcc, g: 0xcc, b: 0xcc, a: 0xff }, // index 204
    Color { r: 0xcc, g: 0x00, b: 0x00, a: 0xff }, // index 205
    Color { r: 0xcc, g: 0x00, b: 0x44, a: 0xff }, // index 206
    Color { r: 0xcc, g: 0x00, b: 0x88, a: 0xff }, // index 207
    Color { r: 0xdd, g: 0x00, b: 0x93, a: 0xff }, // index 208
    Color { r: 0xdd, g: 0x00, b: 0xdd, a: 0xff }, // index 209
    Color { r: 0xdd, g: 0x49, b: 0x00, a: 0xff }, // index 210
    Color { r: 0xdd, g: 0x49, b: 0x49, a: 0xff }, // index 211
    Color { r: 0xdd, g: 0x49, b: 0x93, a: 0xff }, // index 212
    Color { r: 0xdd, g: 0x49, b: 0xdd, a: 0xff }, // index 213
    Color { r: 0xdd, g: 0x93, b: 0x00, a: 0xff }, // index 214
    Color { r: 0xdd, g: 0x93, b: 0x49, a: 0xff }, // index 215
    Color { r: 0xdd, g: 0x93, b: 0x93, a: 0xff }, // index 216
    Color { r: 0xdd, g: 0x93, b: 0xdd, a: 0xff }, // index 217
    Color { r: 0xdd, g: 0xdd, b: 0x00, a: 0xff }, // index 218
    Color { r: 0xdd, g: 0xdd, b: 0x49, a: 0xff }, // index 219
    Color { r: 0xdd, g: 0xdd, b: 0x93, a: 0xff }, // index 220
    Color { r: 0xdd, g: 0xdd, b: 0xdd, a: 0xff }, // index 221
    Color { r: 0xdd, g: 0x00, b: 0x00, a: 0xff }, // index 222
    Color { r: 0xdd, g: 0x00, b: 0x49, a: 0xff }, // index 223
    Color { r: 0xee, g: 0x00, b: 0x4f, a: 0xff }, // index 224
    Color { r: 0xee, g: 0x00, b: 0x9e, a: 0xff }, // index 225
    Color { r: 0xee, g: 0x00, b: 0xee, a: 0xff }, // index 226
    Color { r: 0xee, g: 0x4f, b: 0x00, a: 0xff }, // index 227
    Color { r: 0xee, g: 0x4f, b: 0x4f, a: 0xff }, // index 228
    Color { r: 0xee, g: 0x4f, b: 0x9e, a: 0xff }, // index 229
    Color { r: 0xee, g: 0x4f, b: 0xee, a: 0xff }, // index 230
    Color { r: 0xee, g: 0x9e, b: 0x00, a: 0xff }, // index 231
    Color { r: 0xee, g: 0x9e, b: 0x4f, a: 0xff }, // index 232
    Color { r: 0xee, g: 0x9e, b: 0x9e, a: 0xff }, // index 233
    Color { r: 0xee, g: 0x9e, b: 0xee, a: 0xff }, // index 234
    Color { r: 0xee, g: 0xee, b: 0x00, a: 0xff }, // index 235
    Color { r: 0xee, g: 0xee, b: 0x4f, a: 0xff }, // index 236
    Color { r: 0xee, g: 0xee, b: 0x9e, a: 0xff }, // index 237
    Color { r: 0xee, g: 0xee, b: 0xee, a: 0xff }, // index 238
    Color { r: 0xee, g: 0x00, b: 0x00, a: 0xff }, // index 239
    Color { r: 0xff, g: 0x00, b: 0x00, a: 0xff }, // index 240
    Color { r: 0xff, g: 0x00, b: 0x55, a: 0xff }, // index 241
    Color { r: 0xff, g: 0x00, b: 0xaa, a: 0xff }, // index 242
    Color { r: 0xff, g: 0x00, b: 0xff, a: 0xff }, // index 243
    Color { r: 0xff, g: 0x55, b: 0x00, a: 0xff }, // index 244
    Color { r: 0xff, g: 0x55, b: 0x55, a: 0xff }, // index 245
    Color { r: 0xff, g: 0x55, b: 0xaa, a: 0xff }, // index 246
    Color { r: 0xff, g: 0x55, b: 0xff, a: 0xff }, // index 247
    Color { r: 0xff, g: 0xaa, b: 0x00, a: 0xff }, // index 248
    Color { r: 0xff, g: 0xaa, b: 0x55, a: 0xff }, // index 249
    Color { r: 0xff, g: 0xaa, b: 0xaa, a: 0xff }, // index 250
    Color { r: 0xff, g: 0xaa, b: 0xff, a: 0xff }, // index 251
    Color { r: 0xff, g: 0xff, b: 0x00, a: 0xff }, // index 252
    Color { r: 0xff, g: 0xff, b: 0x55, a: 0xff }, // index 253
    Color { r: 0xff, g: 0xff, b: 0xaa, a: 0xff }, // index 254
    Color { r: 0xff, g: 0xff, b: 0xff, a: 0xff }, // index 255
];

/// WebSafe 调色板 (Netscape 色彩立方)
///
/// 按 红 -> 绿 -> 蓝 的顺序展开，蓝色变化最快：
/// `WEB_SAFE[36 * r + 6 * g + b] == Color::rgb(0x33 * r, 0x33 * g, 0x33 * b)`
///
/// 参见 http://en.wikipedia.org/wiki/Web_colors#Web-safe_colors
pub const WEB_SAFE: [Color; WEB_SAFE_LEN] = build_web_safe();

const fn build_web_safe() -> [Color; WEB_SAFE_LEN] {
    let mut colors = [Color::black(); WEB_SAFE_LEN];
    let mut i = 0;
    while i < WEB_SAFE_LEN {
        let r = (i / (WEB_SAFE_LEVELS * WEB_SAFE_LEVELS)) as u8;
        let g = ((i / WEB_SAFE_LEVELS) % WEB_SAFE_LEVELS) as u8;
        let b = (i % WEB_SAFE_LEVELS) as u8;
        colors[i] = Color::rgb(r * WEB_SAFE_STEP, g * WEB_SAFE_STEP, b * WEB_SAFE_STEP);
        i += 1;
    }
    colors
}
