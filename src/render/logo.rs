/// Factory logo outline, drawn at `translate(130, 50) scale(0.12)`
pub const LOGO_PATH: &str = "M500.76 329.29C499.9 329.077 499.097 328.68 498.404 328.128C497.712 327.575 497.146 326.88 496.748 326.089C496.349 325.298 496.126 324.43 496.093 323.545C496.061 322.659 496.22 321.778 496.56 320.96C508.3 292.39 513.48 269.53 505.12 259.96C482.98 234.57 394.19 285.059 365.88 302.159C365.122 302.615 364.274 302.902 363.395 303C362.516 303.098 361.626 303.005 360.786 302.728C359.946 302.451 359.175 301.996 358.527 301.394C357.879 300.792 357.369 300.057 357.03 299.24C345.13 270.73 332.62 250.9 319.94 250.04C286.33 247.74 259.24 346.229 251.31 378.329C251.098 379.189 250.703 379.993 250.152 380.685C249.6 381.378 248.905 381.943 248.115 382.342C247.325 382.741 246.458 382.964 245.573 382.996C244.689 383.029 243.808 382.87 242.99 382.53C214.42 370.79 191.55 365.61 181.99 373.97C156.6 396.11 207.08 484.9 224.18 513.21C224.637 513.967 224.925 514.815 225.024 515.695C225.123 516.574 225.031 517.465 224.754 518.305C224.477 519.146 224.021 519.917 223.418 520.565C222.815 521.213 222.079 521.722 221.26 522.059C192.76 533.959 172.93 546.469 172.06 559.149C169.77 592.759 268.25 619.85 300.36 627.78C301.218 627.994 302.019 628.391 302.71 628.943C303.4 629.495 303.964 630.19 304.361 630.98C304.759 631.769 304.982 632.635 305.014 633.519C305.047 634.402 304.889 635.283 304.55 636.099C292.81 664.669 287.63 687.539 295.99 697.099C318.13 722.489 406.93 672.009 435.24 654.909";
